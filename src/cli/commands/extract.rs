//! Extract command implementation for the parts processor CLI
//!
//! Parses a catalog feed file and reports every extracted record together
//! with the parse statistics, in human-readable, JSON or CSV form.

use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info, warn};

use super::shared::{ProcessingStats, setup_extract_logging, write_report};
use crate::app::services::feed_parser::{FeedParser, ParseResult};
use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::constants::{REPORT_CSV_HEADER, csv_quote};
use crate::Result;

/// Extract command runner
pub fn run_extract(args: ExtractArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_extract_logging(&args)?;

    info!("Starting record extraction");
    debug!("Extract arguments: {:?}", args);

    args.validate()?;

    let parser = FeedParser::new();
    let result = parser.parse_file(&args.feed)?;

    info!(
        "Extracted {} records from {} data lines ({} skipped)",
        result.stats.records_extracted, result.stats.data_lines, result.stats.lines_skipped
    );
    if result.stats.has_skipped_lines() {
        warn!(
            "{} lines did not match the record shape and were dropped",
            result.stats.lines_skipped
        );
    }

    let report = generate_extract_report(&args, &result)?;
    let written = write_report(&report, args.output_file.as_deref())?;

    let stats = ProcessingStats {
        feeds_processed: 1,
        lines_read: result.stats.total_lines,
        records_extracted: result.stats.records_extracted,
        lines_skipped: result.stats.lines_skipped,
        processing_time: start_time.elapsed(),
        output_sizes: written.into_iter().collect(),
    };

    info!(
        "Extraction completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Generate the extraction report in the requested output format
fn generate_extract_report(args: &ExtractArgs, result: &ParseResult) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(generate_human_report(args, result)),
        OutputFormat::Json => generate_json_report(args, result),
        OutputFormat::Csv => Ok(generate_csv_report(result)),
    }
}

/// Generate a human-readable extraction report
fn generate_human_report(args: &ExtractArgs, result: &ParseResult) -> String {
    let mut output = format!(
        "{}\n{}\n📁 Feed: {}\n📄 Lines: {} total, {} data\n📦 Records: {}\n🚫 Skipped: {} malformed, {} empty\n\n",
        "Parts Extraction Report".bold(),
        "=======================",
        args.feed.display(),
        result.stats.total_lines,
        result.stats.data_lines,
        result.stats.records_extracted.to_string().green(),
        result.stats.lines_skipped,
        result.stats.empty_lines,
    );

    for record in &result.records {
        output.push_str(&format!(
            "{:>4}  {} › {} › {}  [{}]\n      {}\n",
            record.id,
            record.group.cyan(),
            record.subgroup,
            record.part,
            record.stock_code.yellow(),
            record.description.dimmed(),
        ));
    }

    if result.records.is_empty() {
        output.push_str("No records extracted.\n");
    }

    output
}

/// Generate a JSON extraction report
fn generate_json_report(args: &ExtractArgs, result: &ParseResult) -> Result<String> {
    let report = serde_json::json!({
        "feed": args.feed.display().to_string(),
        "stats": &result.stats,
        "records": &result.records,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Generate a CSV extraction report
///
/// Category and stock-code fields are bare by construction (the matcher
/// rejects embedded commas and quotes), so only the description needs
/// quoting.
fn generate_csv_report(result: &ParseResult) -> String {
    let mut output = String::from(REPORT_CSV_HEADER);
    output.push('\n');

    for record in &result.records {
        output.push_str(&format!(
            "{},{},{},{},{},{}\n",
            record.id,
            record.group,
            record.subgroup,
            record.part,
            record.stock_code,
            csv_quote(&record.description),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::PartRecord;
    use crate::app::services::feed_parser::ParseStats;
    use std::path::PathBuf;

    fn sample_result() -> ParseResult {
        ParseResult {
            records: vec![PartRecord::new(
                1,
                "Motor",
                "Yağ Sistemi",
                "Yağ Filtresi",
                "OC90",
                "Orijinal yağ filtresi, 5000 km",
            )],
            stats: ParseStats {
                total_lines: 2,
                data_lines: 1,
                records_extracted: 1,
                lines_skipped: 0,
                empty_lines: 0,
            },
        }
    }

    fn sample_args(format: OutputFormat) -> ExtractArgs {
        ExtractArgs {
            feed: PathBuf::from("feed.csv"),
            output_format: format,
            output_file: None,
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_csv_report_quotes_description() {
        let report = generate_csv_report(&sample_result());

        let mut lines = report.lines();
        assert_eq!(lines.next(), Some(REPORT_CSV_HEADER));
        assert_eq!(
            lines.next(),
            Some("1,Motor,Yağ Sistemi,Yağ Filtresi,OC90,\"Orijinal yağ filtresi, 5000 km\"")
        );
    }

    #[test]
    fn test_json_report_round_trips() {
        let args = sample_args(OutputFormat::Json);
        let report = generate_json_report(&args, &sample_result()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(parsed["stats"]["records_extracted"], 1);
        assert_eq!(parsed["records"][0]["stock_code"], "OC90");
    }

    #[test]
    fn test_human_report_mentions_counts() {
        let args = sample_args(OutputFormat::Human);
        let report = generate_human_report(&args, &sample_result());

        assert!(report.contains("Parts Extraction Report"));
        assert!(report.contains("OC90"));
    }
}
