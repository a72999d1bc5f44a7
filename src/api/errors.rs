use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::errors::CatalogError;

impl IntoResponse for CatalogError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        error!(error_type = class.error_type, retryable = class.retryable, error = %self, "Request failed");

        let (status, message) = match &self {
            CatalogError::DataUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load data".to_string())
            }
            CatalogError::Config(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
