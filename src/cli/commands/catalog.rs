//! Catalog command implementation for the parts processor CLI
//!
//! Parses a catalog feed file, builds the catalog and reports the
//! group/subgroup/part hierarchy, optionally narrowed by exact-match filters.

use std::time::Instant;

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::shared::{ProcessingStats, setup_catalog_logging, write_report};
use crate::app::models::PartRecord;
use crate::app::services::catalog::PartCatalog;
use crate::app::services::feed_parser::FeedParser;
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::constants::{REPORT_CSV_HEADER, csv_quote};
use crate::Result;

/// Catalog command runner
pub fn run_catalog(args: CatalogArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_catalog_logging(&args)?;

    info!("Starting catalog report");
    debug!("Catalog arguments: {:?}", args);

    args.validate()?;

    let parser = FeedParser::new();
    let result = parser.parse_file(&args.feed)?;

    info!(
        "Extracted {} records, building catalog",
        result.stats.records_extracted
    );

    let parse_stats = result.stats;
    let catalog = PartCatalog::from_records(result.records);
    let tree = CatalogTree::build(&catalog, &args);

    if tree.groups.is_empty() && !catalog.is_empty() {
        warn!("No catalog entries match the requested filters");
    }

    let report = generate_catalog_report(&args, &catalog, &tree)?;
    let written = write_report(&report, args.output_file.as_deref())?;

    let stats = ProcessingStats {
        feeds_processed: 1,
        lines_read: parse_stats.total_lines,
        records_extracted: parse_stats.records_extracted,
        lines_skipped: parse_stats.lines_skipped,
        processing_time: start_time.elapsed(),
        output_sizes: written.into_iter().collect(),
    };

    info!(
        "Catalog report completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// The hierarchy slice selected by the command's filters
///
/// Built once from the catalog queries and shared by every output format so
/// that all formats agree on ordering and filtering.
#[derive(Debug, Serialize)]
struct CatalogTree<'a> {
    groups: Vec<GroupEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct GroupEntry<'a> {
    name: &'a str,
    subgroups: Vec<SubgroupEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct SubgroupEntry<'a> {
    name: &'a str,
    parts: Vec<PartEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct PartEntry<'a> {
    name: &'a str,
    record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    records: Option<Vec<&'a PartRecord>>,
}

impl<'a> CatalogTree<'a> {
    fn build(catalog: &'a PartCatalog, args: &CatalogArgs) -> Self {
        let groups = catalog
            .groups()
            .into_iter()
            .filter(|g| args.group.as_deref().is_none_or(|wanted| *g == wanted))
            .map(|group| GroupEntry {
                name: group,
                subgroups: catalog
                    .subgroups(group)
                    .into_iter()
                    .filter(|s| args.subgroup.as_deref().is_none_or(|wanted| *s == wanted))
                    .map(|subgroup| SubgroupEntry {
                        name: subgroup,
                        parts: catalog
                            .parts(group, subgroup)
                            .into_iter()
                            .filter(|p| args.part.as_deref().is_none_or(|wanted| *p == wanted))
                            .map(|part| {
                                let records = catalog.find_parts(group, subgroup, part);
                                PartEntry {
                                    name: part,
                                    record_count: records.len(),
                                    records: args.detailed.then_some(records),
                                }
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { groups }
    }
}

/// Generate the catalog report in the requested output format
fn generate_catalog_report(
    args: &CatalogArgs,
    catalog: &PartCatalog,
    tree: &CatalogTree<'_>,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(generate_human_report(args, catalog, tree)),
        OutputFormat::Json => generate_json_report(args, catalog, tree),
        OutputFormat::Csv => Ok(generate_csv_report(args, tree)),
    }
}

/// Generate a human-readable catalog report
fn generate_human_report(
    args: &CatalogArgs,
    catalog: &PartCatalog,
    tree: &CatalogTree<'_>,
) -> String {
    let stats = catalog.statistics();

    let mut output = format!(
        "{}\n{}\n📁 Feed: {}\n📦 Records: {}\n🗂  Groups: {}, Subgroups: {}, Parts: {}\n\n",
        "Parts Catalog Report".bold(),
        "====================",
        args.feed.display(),
        stats.total_records,
        stats.unique_groups,
        stats.unique_subgroups,
        stats.unique_parts,
    );

    for group in &tree.groups {
        output.push_str(&format!("{}\n", group.name.cyan().bold()));
        for subgroup in &group.subgroups {
            output.push_str(&format!("  {}\n", subgroup.name));
            for part in &subgroup.parts {
                output.push_str(&format!(
                    "    {} ({} {})\n",
                    part.name,
                    part.record_count,
                    if part.record_count == 1 {
                        "record"
                    } else {
                        "records"
                    }
                ));
                if let Some(records) = &part.records {
                    for record in records {
                        output.push_str(&format!(
                            "      #{} [{}] {}\n",
                            record.id,
                            record.stock_code.yellow(),
                            record.description.dimmed(),
                        ));
                    }
                }
            }
        }
    }

    if tree.groups.is_empty() {
        output.push_str("No catalog entries match.\n");
    }

    output
}

/// Generate a JSON catalog report
fn generate_json_report(
    args: &CatalogArgs,
    catalog: &PartCatalog,
    tree: &CatalogTree<'_>,
) -> Result<String> {
    let report = serde_json::json!({
        "feed": args.feed.display().to_string(),
        "statistics": catalog.statistics(),
        "groups": &tree.groups,
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Generate a CSV catalog report
///
/// Without `--detailed` each row is one (group, subgroup, part) triple with
/// its record count; with `--detailed` each row is one matching record.
fn generate_csv_report(args: &CatalogArgs, tree: &CatalogTree<'_>) -> String {
    let mut output = String::new();

    if args.detailed {
        output.push_str(REPORT_CSV_HEADER);
        output.push('\n');
        for group in &tree.groups {
            for subgroup in &group.subgroups {
                for part in &subgroup.parts {
                    for record in part.records.as_deref().unwrap_or_default() {
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
                }
            }
        }
    } else {
        output.push_str("group,subgroup,part,record_count\n");
        for group in &tree.groups {
            for subgroup in &group.subgroups {
                for part in &subgroup.parts {
                    output.push_str(&format!(
                        "{},{},{},{}\n",
                        group.name, subgroup.name, part.name, part.record_count
                    ));
                }
            }
        }
    }

    output
}
