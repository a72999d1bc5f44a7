//! On-disk layout of the dictionary-encoded store.
//!
//! ```text
//! {
//!   "programs":  ["Acme", ...],
//!   "vulnTypes": ["XSS", ...],
//!   "reports":   [[programIdx, title, reportId, upvotes, bounty, vulnTypeIdx], ...],
//!   "meta":      {"stats": {...}},
//!   "rankings":  {"bounty": [row, ...], "upvotes": [row, ...]}
//! }
//! ```
//!
//! Every field is optional. An absent or `null` field reads as empty.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One encoded report row. Cells are kept loosely typed and resolved during decode.
pub type RawRow = Vec<Value>;

/// Column positions inside a [`RawRow`].
pub mod column {
    pub const PROGRAM: usize = 0;
    pub const TITLE: usize = 1;
    pub const REPORT_ID: usize = 2;
    pub const UPVOTES: usize = 3;
    pub const BOUNTY: usize = 4;
    pub const VULN_TYPE: usize = 5;
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStore {
    #[serde(deserialize_with = "null_as_default")]
    pub programs: Vec<String>,
    #[serde(rename = "vulnTypes", deserialize_with = "null_as_default")]
    pub vuln_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reports: Vec<RawRow>,
    #[serde(deserialize_with = "null_as_default")]
    pub meta: RawMeta,
    #[serde(deserialize_with = "null_as_default")]
    pub rankings: RawRankings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub stats: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRankings {
    #[serde(deserialize_with = "null_as_default")]
    pub bounty: Vec<RawRow>,
    #[serde(deserialize_with = "null_as_default")]
    pub upvotes: Vec<RawRow>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Two lookup tables that report rows index into.
#[derive(Debug, Clone, Copy)]
pub struct DictTables<'a> {
    pub programs: &'a [String],
    pub vuln_types: &'a [String],
}

impl<'a> DictTables<'a> {
    pub fn new(store: &'a RawStore) -> Self {
        Self {
            programs: &store.programs,
            vuln_types: &store.vuln_types,
        }
    }

    pub fn program(&self, cell: Option<&Value>) -> Option<&'a str> {
        lookup(self.programs, cell)
    }

    pub fn vuln_type(&self, cell: Option<&Value>) -> Option<&'a str> {
        lookup(self.vuln_types, cell)
    }
}

/// Bounds-checked lookup. Missing, negative, fractional or out-of-range
/// indices and empty entries all resolve to `None`.
fn lookup<'a>(table: &'a [String], cell: Option<&Value>) -> Option<&'a str> {
    let index = usize::try_from(cell?.as_u64()?).ok()?;
    table
        .get(index)
        .map(String::as_str)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store() -> RawStore {
        serde_json::from_value(json!({
            "programs": ["Acme", ""],
            "vulnTypes": ["XSS"],
        }))
        .unwrap()
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let raw: RawStore = serde_json::from_value(json!({})).unwrap();
        assert!(raw.programs.is_empty());
        assert!(raw.reports.is_empty());
        assert!(raw.meta.stats.is_empty());
        assert!(raw.rankings.bounty.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let raw: RawStore = serde_json::from_value(json!({
            "programs": null,
            "meta": null,
            "rankings": {"bounty": null}
        }))
        .unwrap();
        assert!(raw.programs.is_empty());
        assert!(raw.meta.stats.is_empty());
        assert!(raw.rankings.bounty.is_empty());
    }

    #[test]
    fn test_wrong_field_shape_is_rejected() {
        let result = serde_json::from_value::<RawStore>(json!({"programs": "Acme"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_lookup_resolves_in_range_index() {
        let raw = store();
        let tables = DictTables::new(&raw);
        assert_eq!(tables.program(Some(&json!(0))), Some("Acme"));
        assert_eq!(tables.vuln_type(Some(&json!(0))), Some("XSS"));
    }

    #[test]
    fn test_lookup_rejects_bad_indices() {
        let raw = store();
        let tables = DictTables::new(&raw);
        assert_eq!(tables.program(None), None);
        assert_eq!(tables.program(Some(&json!(7))), None);
        assert_eq!(tables.program(Some(&json!(-1))), None);
        assert_eq!(tables.program(Some(&json!(0.5))), None);
        assert_eq!(tables.program(Some(&json!("0"))), None);
        // Empty entries count as unresolved.
        assert_eq!(tables.program(Some(&json!(1))), None);
    }
}
