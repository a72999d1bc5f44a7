//! Read-only queries over a decoded dataset snapshot.
//!
//! Every function here is a pure function of the dataset and its arguments.

pub mod reports;
pub mod categories;
pub mod rankings;

pub use reports::{list_reports, PageInfo, Pagination, ReportFilter, ReportPage};
pub use categories::list_categories;
pub use rankings::top_rankings;
