//! Pure decoding of store bytes into a [`DecodedDataset`].

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use super::format::{column, DictTables, RawRow, RawStore};
use crate::errors::CatalogError;
use crate::models::{Categories, Category, DecodedDataset, Rankings, Report, SummaryStats};
use crate::utils::truncation::truncate_preview;

/// Placeholder for a program or vulnerability type whose index does not resolve.
pub const UNKNOWN: &str = "Unknown";

pub const DEFAULT_LINK_PREFIX: &str = "https://hackerone.com/reports/";
pub const DEFAULT_RANKING_CAP: usize = 20;
/// Rankings are never cut below this many entries.
pub const MIN_RANKING_CAP: usize = 20;
pub const DEFAULT_PREVIEW_LENGTH: usize = 200;

const COMPUTED_STATS: [&str; 5] = [
    "total_reports",
    "total_bounty",
    "total_upvotes",
    "unique_programs",
    "unique_vuln_types",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
    /// Prepended to each report identifier to build `Report::link`.
    pub link_prefix: String,
    /// Maximum entries kept per ranking list.
    pub ranking_cap: usize,
    /// Characters of category description kept before the ellipsis.
    pub preview_length: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            link_prefix: DEFAULT_LINK_PREFIX.to_string(),
            ranking_cap: DEFAULT_RANKING_CAP,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// Decode the raw bytes of a store file.
///
/// Fails with `DataUnavailable` when the bytes are not a JSON object or a
/// present field has the wrong shape. Never returns a partial dataset.
pub fn decode_store(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedDataset, CatalogError> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::DataUnavailable(format!("Store is not valid JSON: {}", e)))?;

    if !document.is_object() {
        return Err(CatalogError::DataUnavailable(
            "Store root must be a JSON object".into(),
        ));
    }

    let raw: RawStore = serde_json::from_value(document)
        .map_err(|e| CatalogError::DataUnavailable(format!("Store has an invalid layout: {}", e)))?;

    Ok(decode_raw(&raw, options))
}

/// Decode an already-parsed store.
pub fn decode_raw(raw: &RawStore, options: &DecodeOptions) -> DecodedDataset {
    let tables = DictTables::new(raw);

    let reports: Vec<Report> = raw
        .reports
        .iter()
        .map(|row| decode_row(row, tables, &options.link_prefix))
        .collect();

    let rankings = Rankings {
        top_by_bounty: decode_ranking(&raw.rankings.bounty, tables, options, |a, b| {
            b.bounty.total_cmp(&a.bounty)
        }),
        top_by_upvotes: decode_ranking(&raw.rankings.upvotes, tables, options, |a, b| {
            b.upvotes.cmp(&a.upvotes)
        }),
    };

    let categories = Categories {
        by_bug_type: build_categories(&raw.vuln_types, "vuln", options.preview_length, |name| {
            format!(
                "Vulnerability type: {name}. This category contains security reports related to {name} vulnerabilities."
            )
        }),
        by_program: build_categories(&raw.programs, "program", options.preview_length, |name| {
            format!(
                "Bug bounty program: {name}. This category contains security reports submitted to the {name} bug bounty program."
            )
        }),
    };

    let stats = compute_stats(&reports, &raw.meta.stats);

    DecodedDataset {
        reports,
        categories,
        rankings,
        stats,
    }
}

/// Decode one `[programIdx, title, reportId, upvotes, bounty, vulnTypeIdx]` row.
pub fn decode_row(row: &[Value], tables: DictTables<'_>, link_prefix: &str) -> Report {
    let report_id = match row.get(column::REPORT_ID) {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    };

    Report {
        program: tables
            .program(row.get(column::PROGRAM))
            .unwrap_or(UNKNOWN)
            .to_string(),
        title: row
            .get(column::TITLE)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        link: format!("{}{}", link_prefix, report_id),
        upvotes: row
            .get(column::UPVOTES)
            .and_then(Value::as_u64)
            .unwrap_or(0),
        bounty: row
            .get(column::BOUNTY)
            .and_then(Value::as_f64)
            .filter(|b| b.is_finite() && *b >= 0.0)
            .unwrap_or(0.0),
        vuln_type: tables
            .vuln_type(row.get(column::VULN_TYPE))
            .unwrap_or(UNKNOWN)
            .to_string(),
    }
}

fn decode_ranking<F>(
    rows: &[RawRow],
    tables: DictTables<'_>,
    options: &DecodeOptions,
    order: F,
) -> Vec<Report>
where
    F: Fn(&Report, &Report) -> Ordering,
{
    let mut ranked: Vec<Report> = rows
        .iter()
        .map(|row| decode_row(row, tables, &options.link_prefix))
        .collect();
    // sort_by is stable: equal keys keep their stored order.
    ranked.sort_by(|a, b| order(a, b));
    ranked.truncate(options.ranking_cap.max(MIN_RANKING_CAP));
    ranked
}

fn build_categories<F>(names: &[String], prefix: &str, preview_length: usize, describe: F) -> Vec<Category>
where
    F: Fn(&str) -> String,
{
    names
        .iter()
        .enumerate()
        .map(|(index, name)| Category {
            name: name.clone(),
            identifier: format!("{}_{}", prefix, index),
            preview: truncate_preview(&describe(name), preview_length),
        })
        .collect()
}

fn compute_stats(reports: &[Report], stored: &Map<String, Value>) -> SummaryStats {
    // The "Unknown" placeholder is not a program or vulnerability type of its own.
    let programs: BTreeSet<&str> = reports
        .iter()
        .map(|r| r.program.as_str())
        .filter(|name| *name != UNKNOWN)
        .collect();
    let vuln_types: BTreeSet<&str> = reports
        .iter()
        .map(|r| r.vuln_type.as_str())
        .filter(|name| *name != UNKNOWN)
        .collect();

    let extra: BTreeMap<String, Value> = stored
        .iter()
        .filter(|(key, _)| !COMPUTED_STATS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    SummaryStats {
        total_reports: reports.len(),
        total_bounty: reports.iter().map(|r| r.bounty).sum(),
        total_upvotes: reports
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.upvotes)),
        unique_programs: programs.len(),
        unique_vuln_types: vuln_types.len(),
        extra,
    }
}
