//! Catalog service for group/subgroup/part lookups over extracted records
//!
//! The catalog holds the flat, ordered record sequence produced by one parse
//! run and answers hierarchy queries over it with linear filters. For the
//! expected feed sizes (tens to low thousands of records) the flat scans are
//! sufficient; every query preserves first-appearance order for deduplicated
//! label sets and feed order for record subsets.

use crate::app::models::PartRecord;

pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use query::CatalogStatistics;

/// In-memory catalog over one extracted record sequence
///
/// The catalog never mutates its records; it is a read-only view session over
/// one extraction run. Independent catalogs share nothing, so concurrent use
/// on separate inputs needs no coordination.
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    /// Extracted records in feed order
    pub(crate) records: Vec<PartRecord>,
}

impl PartCatalog {
    /// Create a catalog over an extracted record sequence
    pub fn from_records(records: Vec<PartRecord>) -> Self {
        Self { records }
    }

    /// All records in feed order
    pub fn records(&self) -> &[PartRecord] {
        &self.records
    }

    /// Total number of records in the catalog
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
