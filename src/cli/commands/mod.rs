//! CLI command implementations for the parts processor

pub mod catalog;
pub mod extract;
pub mod shared;

pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Run the command specified on the command line
pub fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
        Commands::Catalog(catalog_args) => catalog::run_catalog(catalog_args),
    }
}
