use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::SUMMARY_CACHE_CONTROL;
use crate::api::models::CategoriesQuery;
use crate::api::AppState;
use crate::errors::CatalogError;
use crate::models::CategoryKind;
use crate::query;

pub async fn get_categories(
    State(state): State<AppState>,
    Query(params): Query<CategoriesQuery>,
) -> Result<impl IntoResponse, CatalogError> {
    let requested = params.requested();
    let dataset = state.cache.snapshot().await?;

    // Unknown types get an empty list rather than an error.
    let categories = match requested.parse::<CategoryKind>() {
        Ok(kind) => query::list_categories(&dataset, kind).to_vec(),
        Err(_) => Vec::new(),
    };

    Ok((
        [(header::CACHE_CONTROL, SUMMARY_CACHE_CONTROL)],
        Json(json!({
            "type": requested,
            "categories": categories,
        })),
    ))
}
