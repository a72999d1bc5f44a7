use serde::Serialize;

use crate::models::{DecodedDataset, Report};

/// Filters for [`list_reports`]. Empty strings count as "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportFilter {
    /// Case-insensitive. Exact program matches win; substring matches are
    /// used only when nothing matches exactly.
    pub program: Option<String>,
    /// Case-insensitive substring of the vulnerability type.
    pub vuln_type: Option<String>,
    /// Keep reports with `bounty >= min_bounty`. Ignored unless positive.
    pub min_bounty: f64,
    /// Case-insensitive substring of title, program or vulnerability type.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    limit: usize,
}

impl Pagination {
    pub const DEFAULT_PAGE: usize = 1;
    pub const DEFAULT_LIMIT: usize = 10;

    /// Page numbers start at 1. Zero for either value is raised to 1.
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_reports: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportPage {
    pub reports: Vec<Report>,
    pub pagination: PageInfo,
}

/// Filter, then paginate. Filters apply in the order program, vuln_type,
/// min_bounty, search and all must hold.
pub fn list_reports(dataset: &DecodedDataset, filter: &ReportFilter, pagination: Pagination) -> ReportPage {
    let matched = filter_reports(&dataset.reports, filter);
    let total = matched.len();

    let reports = matched
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit())
        .cloned()
        .collect();

    ReportPage {
        reports,
        pagination: PageInfo {
            current_page: pagination.page(),
            total_pages: total.div_ceil(pagination.limit()),
            total_reports: total,
            per_page: pagination.limit(),
        },
    }
}

fn filter_reports<'a>(reports: &'a [Report], filter: &ReportFilter) -> Vec<&'a Report> {
    let mut matched: Vec<&Report> = reports.iter().collect();

    if let Some(program) = needle(&filter.program) {
        let exact: Vec<&Report> = matched
            .iter()
            .copied()
            .filter(|r| r.program.to_lowercase() == program)
            .collect();
        matched = if exact.is_empty() {
            matched
                .into_iter()
                .filter(|r| r.program.to_lowercase().contains(&program))
                .collect()
        } else {
            exact
        };
    }

    if let Some(vuln_type) = needle(&filter.vuln_type) {
        matched.retain(|r| r.vuln_type.to_lowercase().contains(&vuln_type));
    }

    if filter.min_bounty > 0.0 {
        matched.retain(|r| r.bounty >= filter.min_bounty);
    }

    if let Some(search) = needle(&filter.search) {
        matched.retain(|r| {
            r.title.to_lowercase().contains(&search)
                || r.program.to_lowercase().contains(&search)
                || r.vuln_type.to_lowercase().contains(&search)
        });
    }

    matched
}

/// Lowercased filter value, or `None` when unset or empty.
fn needle(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}
