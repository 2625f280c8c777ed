//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! both CLI command implementations.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::args::{CatalogArgs, ExtractArgs};
use crate::{Error, Result};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of feed files processed
    pub feeds_processed: usize,
    /// Total input lines read, header included
    pub lines_read: usize,
    /// Number of records extracted
    pub records_extracted: usize,
    /// Number of malformed lines dropped
    pub lines_skipped: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }
}

/// Set up structured logging for the extract command
pub fn setup_extract_logging(args: &ExtractArgs) -> Result<()> {
    init_logging(args.get_log_level());
    Ok(())
}

/// Set up structured logging for the catalog command
pub fn setup_catalog_logging(args: &CatalogArgs) -> Result<()> {
    init_logging(args.get_log_level());
    Ok(())
}

fn init_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("parts_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Write a report to the output file, or print it to stdout
///
/// Returns the written file name and size for the processing stats when an
/// output file was used.
pub fn write_report(report: &str, output_file: Option<&Path>) -> Result<Option<(String, u64)>> {
    match output_file {
        Some(path) => {
            fs::write(path, report).map_err(|e| {
                Error::io(
                    format!("Failed to write report to '{}'", path.display()),
                    e,
                )
            })?;
            Ok(Some((
                path.display().to_string(),
                report.len() as u64,
            )))
        }
        None => {
            println!("{}", report);
            Ok(None)
        }
    }
}
