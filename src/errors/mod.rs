pub mod types;
pub mod classification;

pub use types::CatalogError;
pub use classification::ErrorClassification;
