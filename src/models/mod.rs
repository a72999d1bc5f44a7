pub mod report;
pub mod category;
pub mod dataset;

pub use report::*;
pub use category::*;
pub use dataset::*;
