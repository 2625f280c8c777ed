//! Application constants for the parts processor
//!
//! This module contains the feed-format constants and report defaults used
//! throughout the parts processor application.

// =============================================================================
// Feed Format Constants
// =============================================================================

/// Field delimiter used by catalog feed exports
pub const FEED_DELIMITER: char = ',';

/// Quote character wrapping the description field
pub const FEED_QUOTE: char = '"';

/// Line pattern for a well-formed data line.
///
/// A data line carries six comma-separated tokens: a source row token
/// (matched but never captured into the record), then group, subgroup, part
/// and stock code as bare tokens, then a double-quoted description anchored
/// at the end of the line. Bare tokens contain neither commas nor quotes;
/// the quoted description may contain commas but no quote character, so a
/// feed that escapes quotes inside descriptions is not supported. Trailing
/// whitespace after the closing quote is tolerated for CRLF feeds.
pub const FEED_LINE_PATTERN: &str =
    r#"^([^,"]*),([^,"]*),([^,"]*),([^,"]*),([^,"]*),"([^"]*)"\s*$"#;

/// Identifier assigned to the first extracted record
pub const FIRST_RECORD_ID: u32 = 1;

/// Number of category levels in the catalog hierarchy
pub const CATALOG_DEPTH: usize = 3;

// =============================================================================
// Report Constants
// =============================================================================

/// Column header row for CSV report output
pub const REPORT_CSV_HEADER: &str = "id,group,subgroup,part,stock_code,description";

/// Names of the catalog hierarchy levels, outermost first
pub const CATALOG_LEVEL_NAMES: &[&str] = &["group", "subgroup", "part"];

// =============================================================================
// Helper Functions
// =============================================================================

/// Quote a field for CSV report output, doubling embedded quotes
pub fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
