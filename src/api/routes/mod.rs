pub mod health;
pub mod reports;
pub mod categories;
pub mod stats;

/// Cache headers sent to browsers; the report list changes with filters so it expires sooner.
pub const REPORTS_CACHE_CONTROL: &str = "public, max-age=60, stale-while-revalidate=30";
pub const SUMMARY_CACHE_CONTROL: &str = "public, max-age=300, stale-while-revalidate=60";
