//! Core parsing orchestration over feed text and files

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::line_matcher::LineMatcher;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::PartRecord;
use crate::constants::FIRST_RECORD_ID;
use crate::{Error, Result};

/// Single-pass parser for catalog feed text
///
/// Every parse run is a pure function of its input: nothing is cached between
/// calls, and parsing the same text twice yields equivalent records with
/// identical field values and ids. The parser holds only the compiled line
/// matcher, so one instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    matcher: LineMatcher,
}

impl FeedParser {
    /// Create a new feed parser
    pub fn new() -> Self {
        Self {
            matcher: LineMatcher::new(),
        }
    }

    /// Extract records from raw feed text
    ///
    /// The first line is always treated as a header and discarded, regardless
    /// of its content. Empty and whitespace-only lines are skipped. Each
    /// remaining line either matches the record shape and yields one record,
    /// or is dropped silently. This operation cannot fail: the worst outcome
    /// for any input value is fewer records than input lines.
    pub fn parse_text(&self, raw_text: &str) -> ParseResult {
        let mut records = Vec::new();
        let mut stats = ParseStats::default();

        for (line_number, line) in raw_text.lines().enumerate() {
            stats.total_lines += 1;

            // First line is the feed header, excluded unconditionally.
            if line_number == 0 {
                continue;
            }
            stats.data_lines += 1;

            if line.trim().is_empty() {
                stats.empty_lines += 1;
                continue;
            }

            match self.matcher.match_line(line) {
                Some(fields) => {
                    let id = records.len() as u32 + FIRST_RECORD_ID;
                    records.push(PartRecord::new(
                        id,
                        fields.group,
                        fields.subgroup,
                        fields.part,
                        fields.stock_code,
                        fields.description,
                    ));
                    stats.records_extracted += 1;
                }
                None => {
                    // Silent-drop policy: log at debug, never error.
                    debug!(
                        line = line_number + 1,
                        "skipping line that does not match the record shape"
                    );
                    stats.lines_skipped += 1;
                }
            }
        }

        if stats.has_skipped_lines() {
            warn!(
                skipped = stats.lines_skipped,
                extracted = stats.records_extracted,
                "feed contained malformed lines"
            );
        }

        ParseResult { records, stats }
    }

    /// Extract records from a feed file on disk
    ///
    /// File-level failures (missing file, unreadable, not valid UTF-8) are
    /// the caller's problem and surface as errors; line-level problems inside
    /// the file follow the silent-drop policy of [`Self::parse_text`].
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        if path.is_dir() {
            return Err(Error::feed(
                path.display().to_string(),
                "path is a directory, expected a feed file",
            ));
        }

        let raw_text = fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read feed file '{}'", path.display()), e)
        })?;

        debug!(file = %path.display(), bytes = raw_text.len(), "read feed file");

        Ok(self.parse_text(&raw_text))
    }
}
