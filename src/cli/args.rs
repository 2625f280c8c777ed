//! Command-line argument definitions for the parts processor
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the parts catalog feed processor
///
/// Extracts structured spare-part records from semi-structured service
/// catalog feed exports and reports on the group/subgroup/part hierarchy.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "parts-processor",
    version,
    about = "Extract structured spare-part records from service catalog feed exports",
    long_about = "A tool that parses line-oriented service catalog feeds into structured \
                  spare-part records. The first feed line is a header and is always discarded; \
                  lines that do not present the expected five-field shape are dropped silently. \
                  Extracted records can be reported directly or queried through the \
                  group/subgroup/part catalog hierarchy."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the parts processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Extract records from a feed file and report them
    Extract(ExtractArgs),
    /// Build the catalog hierarchy from a feed file and report it
    Catalog(CatalogArgs),
}

/// Arguments for the extract command (record extraction and reporting)
#[derive(Debug, Clone, Parser)]
pub struct ExtractArgs {
    /// Path to the catalog feed file
    ///
    /// A line-oriented text export whose first line is a header. Data lines
    /// carry a row token, four bare fields and one quoted description.
    #[arg(value_name = "FEED", help = "Path to the catalog feed file")]
    pub feed: PathBuf,

    /// Output format for the extraction report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the extraction report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the extraction report
    ///
    /// If not specified, the report is written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the extraction report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the catalog command (hierarchy reports)
#[derive(Debug, Clone, Parser)]
pub struct CatalogArgs {
    /// Path to the catalog feed file
    #[arg(value_name = "FEED", help = "Path to the catalog feed file")]
    pub feed: PathBuf,

    /// Narrow the report to one group (exact match)
    #[arg(long = "group", value_name = "GROUP", help = "Narrow to one group")]
    pub group: Option<String>,

    /// Narrow the report to one subgroup (requires --group)
    #[arg(
        long = "subgroup",
        value_name = "SUBGROUP",
        requires = "group",
        help = "Narrow to one subgroup (requires --group)"
    )]
    pub subgroup: Option<String>,

    /// Narrow the report to one part (requires --subgroup)
    #[arg(
        long = "part",
        value_name = "PART",
        requires = "subgroup",
        help = "Narrow to one part (requires --subgroup)"
    )]
    pub part: Option<String>,

    /// Include full record listings in the report
    ///
    /// By default, the report shows the label hierarchy with record counts.
    /// This flag lists stock codes and descriptions for matching records.
    #[arg(long = "detailed", help = "Include full record listings in report")]
    pub detailed: bool,

    /// Output format for the catalog report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the catalog report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the catalog report
    ///
    /// If not specified, the report is written to stdout.
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the catalog report"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ExtractArgs {
    /// Validate the extract command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_feed_path(&self.feed)?;
        validate_output_file(self.output_file.as_deref())?;
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl CatalogArgs {
    /// Validate the catalog command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_feed_path(&self.feed)?;
        validate_output_file(self.output_file.as_deref())?;

        // clap enforces --subgroup/--part prerequisites for real invocations;
        // repeat the check here so programmatic construction fails the same way.
        if self.subgroup.is_some() && self.group.is_none() {
            return Err(Error::configuration(
                "--subgroup requires --group".to_string(),
            ));
        }
        if self.part.is_some() && self.subgroup.is_none() {
            return Err(Error::configuration(
                "--part requires --subgroup".to_string(),
            ));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Validate that the feed path exists and is a file
fn validate_feed_path(feed: &std::path::Path) -> Result<()> {
    if !feed.exists() {
        return Err(Error::configuration(format!(
            "Feed file does not exist: {}",
            feed.display()
        )));
    }

    if feed.is_dir() {
        return Err(Error::configuration(format!(
            "Feed path is a directory, not a file: {}",
            feed.display()
        )));
    }

    Ok(())
}

/// Validate that the output file directory exists if specified
fn validate_output_file(output_file: Option<&std::path::Path>) -> Result<()> {
    if let Some(output_file) = output_file {
        if let Some(parent) = output_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output file directory does not exist: {}",
                    parent.display()
                )));
            }
        }
    }

    Ok(())
}
