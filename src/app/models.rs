//! Data models for extracted catalog records
//!
//! The central type is [`PartRecord`], one structured entity extracted from a
//! single feed line. Records are immutable after construction and only live
//! in memory for the duration of a query session.

use serde::{Deserialize, Serialize};

/// A spare-part record extracted from one catalog feed line
///
/// The `id` is assigned sequentially in emission order starting at 1 and is
/// never derived from the feed content; re-running extraction over the same
/// input reproduces the same ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartRecord {
    /// Sequential identifier, dense over one extraction run (1..=k)
    pub id: u32,

    /// Primary category label
    pub group: String,

    /// Secondary category label, scoped under `group`
    pub subgroup: String,

    /// Tertiary category label, scoped under `group` + `subgroup`
    pub part: String,

    /// Free-form stock code identifier
    pub stock_code: String,

    /// Free-text description; may contain embedded delimiter characters
    pub description: String,
}

impl PartRecord {
    /// Create a new part record
    pub fn new(
        id: u32,
        group: impl Into<String>,
        subgroup: impl Into<String>,
        part: impl Into<String>,
        stock_code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            group: group.into(),
            subgroup: subgroup.into(),
            part: part.into(),
            stock_code: stock_code.into(),
            description: description.into(),
        }
    }

    /// Check whether this record sits under the given group (exact match)
    pub fn in_group(&self, group: &str) -> bool {
        self.group == group
    }

    /// Check whether this record sits under the given group and subgroup
    pub fn in_subgroup(&self, group: &str, subgroup: &str) -> bool {
        self.group == group && self.subgroup == subgroup
    }

    /// Check whether this record matches the full category triple exactly
    pub fn matches_category(&self, group: &str, subgroup: &str, part: &str) -> bool {
        self.group == group && self.subgroup == subgroup && self.part == part
    }
}
