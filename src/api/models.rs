use serde::Deserialize;

use crate::query::{Pagination, ReportFilter};

/// Query string of `GET /api/reports`.
///
/// Numbers arrive as raw strings so that malformed values fall back to
/// defaults instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ReportsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub program: Option<String>,
    pub vuln_type: Option<String>,
    pub min_bounty: Option<String>,
    pub search: Option<String>,
}

impl ReportsQuery {
    pub fn filter(&self) -> ReportFilter {
        ReportFilter {
            program: self.program.clone(),
            vuln_type: self.vuln_type.clone(),
            min_bounty: self
                .min_bounty
                .as_deref()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(0.0),
            search: self.search.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            parse_count(self.page.as_deref()).unwrap_or(Pagination::DEFAULT_PAGE),
            parse_count(self.limit.as_deref()).unwrap_or(Pagination::DEFAULT_LIMIT),
        )
    }
}

/// Query string of `GET /api/categories`.
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl CategoriesQuery {
    pub const DEFAULT_KIND: &'static str = "bug_type";

    /// Requested type as sent, or `bug_type` when absent or empty.
    pub fn requested(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or(Self::DEFAULT_KIND)
    }
}

fn parse_count(value: Option<&str>) -> Option<usize> {
    value?.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reports_query(pairs: &[(&str, &str)]) -> ReportsQuery {
        let mut query = ReportsQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "page" => query.page = value,
                "limit" => query.limit = value,
                "program" => query.program = value,
                "vuln_type" => query.vuln_type = value,
                "min_bounty" => query.min_bounty = value,
                "search" => query.search = value,
                _ => unreachable!(),
            }
        }
        query
    }

    #[test]
    fn test_defaults() {
        let query = ReportsQuery::default();
        assert_eq!(query.pagination(), Pagination::default());
        assert_eq!(query.filter(), ReportFilter::default());
    }

    #[test]
    fn test_non_numeric_min_bounty_means_no_filter() {
        let query = reports_query(&[("min_bounty", "lots")]);
        assert_eq!(query.filter().min_bounty, 0.0);

        let query = reports_query(&[("min_bounty", "NaN")]);
        assert_eq!(query.filter().min_bounty, 0.0);

        let query = reports_query(&[("min_bounty", "250.5")]);
        assert_eq!(query.filter().min_bounty, 250.5);
    }

    #[test]
    fn test_bad_page_and_limit_fall_back() {
        let query = reports_query(&[("page", "-2"), ("limit", "abc")]);
        assert_eq!(query.pagination(), Pagination::default());

        let query = reports_query(&[("page", "0"), ("limit", "0")]);
        assert_eq!(query.pagination(), Pagination::default());

        let query = reports_query(&[("page", "3"), ("limit", "25")]);
        assert_eq!(query.pagination(), Pagination::new(3, 25));
    }

    #[test]
    fn test_category_type_defaults_to_bug_type() {
        assert_eq!(CategoriesQuery::default().requested(), "bug_type");
        let empty = CategoriesQuery { kind: Some(String::new()) };
        assert_eq!(empty.requested(), "bug_type");
        let program = CategoriesQuery { kind: Some("program".to_string()) };
        assert_eq!(program.requested(), "program");
    }
}
