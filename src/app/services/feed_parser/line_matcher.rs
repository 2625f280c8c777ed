//! Line shape matching for catalog feed data lines
//!
//! A well-formed data line carries a source row token, four bare category and
//! stock-code tokens, and a double-quoted description anchored at the end of
//! the line. Anything else is not a data line and produces no fields.

use regex::Regex;

use crate::constants::FEED_LINE_PATTERN;

/// The five fields captured from a well-formed data line, already trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields {
    pub group: String,
    pub subgroup: String,
    pub part: String,
    pub stock_code: String,
    pub description: String,
}

/// Matcher for the fixed five-field data line shape
///
/// The pattern is compiled once per matcher instance and reused across every
/// line of a parse run. Matching never fails: a non-conforming line simply
/// yields `None`.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    pattern: Regex,
}

impl LineMatcher {
    /// Create a matcher for the feed data line shape
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(FEED_LINE_PATTERN).expect("feed line pattern is valid"),
        }
    }

    /// Match one line against the data line shape
    ///
    /// Returns the trimmed field values for a conforming line, or `None` for
    /// any line that does not present exactly the expected shape: a bare
    /// leading token, four bare tokens, then one quoted trailing field. The
    /// leading source row token is matched but discarded; record identifiers
    /// are assigned positionally by the parser, never taken from the feed.
    pub fn match_line(&self, line: &str) -> Option<LineFields> {
        let captures = self.pattern.captures(line)?;

        // Capture 1 is the source row token, ignored by design.
        Some(LineFields {
            group: captures[2].trim().to_string(),
            subgroup: captures[3].trim().to_string(),
            part: captures[4].trim().to_string(),
            stock_code: captures[5].trim().to_string(),
            description: captures[6].trim().to_string(),
        })
    }
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new()
    }
}
