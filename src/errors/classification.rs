use super::types::CatalogError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub retryable: bool,
}

impl CatalogError {
    /// Classify this error to determine its type and whether a retry could succeed.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            // The store may be rewritten at any moment, so a later request can succeed.
            CatalogError::DataUnavailable(_) => ErrorClassification {
                error_type: "DataUnavailableError",
                retryable: true,
            },
            CatalogError::Io(_) => ErrorClassification {
                error_type: "IoError",
                retryable: true,
            },

            CatalogError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                retryable: false,
            },
            CatalogError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                retryable: false,
            },
            CatalogError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                retryable: false,
            },
            CatalogError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                retryable: true,
            },
        }
    }
}
