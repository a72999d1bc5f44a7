use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The store is missing or corrupt and no earlier snapshot can stand in.
    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
