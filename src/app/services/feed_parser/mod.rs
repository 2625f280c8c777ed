//! Feed parser for service catalog exports
//!
//! This module provides a single-pass parser for line-oriented catalog feed
//! text. The first line of a feed is a header and is always discarded; each
//! remaining line is matched against the fixed five-field record shape and
//! either yields one [`crate::PartRecord`] or is dropped silently.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Parsing orchestration over feed text and files
//! - [`line_matcher`] - The five-field line shape matcher
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use parts_processor::FeedParser;
//!
//! let feed = "no,group,subgroup,part,stock,description\n\
//!             1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"Orijinal yağ filtresi, 5000 km\"\n";
//!
//! let parser = FeedParser::new();
//! let result = parser.parse_text(feed);
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].group, "Motor");
//! ```

pub mod line_matcher;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_matcher::LineMatcher;
pub use parser::FeedParser;
pub use stats::{ParseResult, ParseStats};
