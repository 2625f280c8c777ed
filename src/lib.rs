//! Parts Processor Library
//!
//! A Rust library for extracting structured spare-part records from
//! semi-structured service catalog feed exports.
//!
//! This library provides tools for:
//! - Parsing line-oriented catalog feeds with a fixed header line
//! - Matching data lines against the five-field record shape
//! - Building an in-memory catalog with group/subgroup/part lookups
//! - Generating human-readable, JSON, and CSV reports
//!
//! The extraction core is infallible by design: lines that do not conform to
//! the expected shape are dropped silently and never surface an error. The
//! error types below exist only for the tool surface around the core (file
//! I/O, configuration, report generation).

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod feed_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::PartRecord;
pub use app::services::catalog::PartCatalog;
pub use app::services::feed_parser::{FeedParser, ParseResult, ParseStats};

/// Result type alias for the parts processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parts processor tool operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Feed file problem outside the parser's silent-drop policy,
    /// e.g. the feed path is a directory or the file is not valid UTF-8
    #[error("Feed error in '{file}': {message}")]
    Feed { file: String, message: String },

    /// Report generation error
    #[error("Report generation error: {message}")]
    ReportGeneration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a feed error with file context
    pub fn feed(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Feed {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a report generation error
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::ReportGeneration {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}
