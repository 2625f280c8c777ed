//! Parsing statistics and result structures

use serde::Serialize;

use crate::app::models::PartRecord;

/// Statistics collected over one parse run
///
/// The extraction core drops malformed lines silently; these counters are the
/// only visibility into how much of the feed was dropped. They are advisory
/// and never turn a dropped line into an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Total lines in the input, header included
    pub total_lines: usize,

    /// Lines considered for extraction (everything after the header)
    pub data_lines: usize,

    /// Records successfully extracted
    pub records_extracted: usize,

    /// Non-empty data lines that did not match the record shape
    pub lines_skipped: usize,

    /// Empty or whitespace-only data lines
    pub empty_lines: usize,
}

impl ParseStats {
    /// Fraction of data lines that produced a record, in 0.0..=1.0
    ///
    /// Returns 1.0 for a feed with no data lines, since nothing was dropped.
    pub fn extraction_ratio(&self) -> f64 {
        if self.data_lines == 0 {
            return 1.0;
        }
        self.records_extracted as f64 / self.data_lines as f64
    }

    /// Whether any data line was dropped as malformed
    pub fn has_skipped_lines(&self) -> bool {
        self.lines_skipped > 0
    }
}

/// Result of one parse run: the extracted records plus run statistics
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Extracted records in feed line order, ids dense from 1
    pub records: Vec<PartRecord>,

    /// Counters describing the run
    pub stats: ParseStats,
}

impl ParseResult {
    /// Whether the run produced no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
