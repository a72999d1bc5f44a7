use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::{Category, CategoryKind};
use super::report::{serialize_amount, Report};

/// Precomputed top-N lists, each sorted descending on its field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rankings {
    pub top_by_bounty: Vec<Report>,
    pub top_by_upvotes: Vec<Report>,
}

/// Scalar aggregates computed once per dataset build.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_reports: usize,
    #[serde(serialize_with = "serialize_amount")]
    pub total_bounty: f64,
    pub total_upvotes: u64,
    pub unique_programs: usize,
    pub unique_vuln_types: usize,
    /// Extra keys found in the store's `meta.stats`, passed through as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Categories {
    pub by_bug_type: Vec<Category>,
    pub by_program: Vec<Category>,
}

impl Categories {
    pub fn get(&self, kind: CategoryKind) -> &[Category] {
        match kind {
            CategoryKind::BugType => &self.by_bug_type,
            CategoryKind::Program => &self.by_program,
        }
    }
}

/// The query-ready, immutable form of the store.
///
/// A refresh always builds a new value; nothing mutates a dataset once it has
/// been handed to the cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecodedDataset {
    pub reports: Vec<Report>,
    pub categories: Categories,
    pub rankings: Rankings,
    pub stats: SummaryStats,
}
