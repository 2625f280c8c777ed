//! Catalog lookup and query functionality
//!
//! This module provides the hierarchy queries over the flat record sequence:
//! distinct labels at each category level and exact-match record lookups.
//! All matching is exact string equality; no case or whitespace normalization
//! is applied beyond the trimming extraction already performed.

use std::collections::HashSet;

use serde::Serialize;

use super::PartCatalog;
use crate::app::models::PartRecord;

impl PartCatalog {
    /// Distinct group labels in first-appearance order
    pub fn groups(&self) -> Vec<&str> {
        dedup_in_order(self.records.iter().map(|r| r.group.as_str()))
    }

    /// Distinct subgroup labels under a group, first-appearance order
    ///
    /// Returns an empty vector when no record belongs to the group.
    pub fn subgroups(&self, group: &str) -> Vec<&str> {
        dedup_in_order(
            self.records
                .iter()
                .filter(|r| r.in_group(group))
                .map(|r| r.subgroup.as_str()),
        )
    }

    /// Distinct part labels under a (group, subgroup) pair, first-appearance order
    pub fn parts(&self, group: &str, subgroup: &str) -> Vec<&str> {
        dedup_in_order(
            self.records
                .iter()
                .filter(|r| r.in_subgroup(group, subgroup))
                .map(|r| r.part.as_str()),
        )
    }

    /// All records matching a full category triple exactly, in feed order
    pub fn find_parts(&self, group: &str, subgroup: &str, part: &str) -> Vec<&PartRecord> {
        self.records
            .iter()
            .filter(|r| r.matches_category(group, subgroup, part))
            .collect()
    }

    /// Basic statistics about the catalog
    pub fn statistics(&self) -> CatalogStatistics {
        let mut stock_codes = HashSet::new();
        let mut subgroup_pairs = HashSet::new();
        let mut part_triples = HashSet::new();

        for record in &self.records {
            stock_codes.insert(record.stock_code.as_str());
            subgroup_pairs.insert((record.group.as_str(), record.subgroup.as_str()));
            part_triples.insert((
                record.group.as_str(),
                record.subgroup.as_str(),
                record.part.as_str(),
            ));
        }

        CatalogStatistics {
            total_records: self.records.len(),
            unique_groups: self.groups().len(),
            unique_subgroups: subgroup_pairs.len(),
            unique_parts: part_triples.len(),
            unique_stock_codes: stock_codes.len(),
        }
    }
}

/// Deduplicate labels by exact equality, preserving first-appearance order
fn dedup_in_order<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for label in labels {
        if seen.insert(label) {
            ordered.push(label);
        }
    }

    ordered
}

/// Basic statistics about a catalog
///
/// Subgroup and part counts are scoped: two subgroups with the same label
/// under different groups count separately, matching the hierarchy the
/// queries expose.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogStatistics {
    pub total_records: usize,
    pub unique_groups: usize,
    pub unique_subgroups: usize,
    pub unique_parts: usize,
    pub unique_stock_codes: usize,
}
