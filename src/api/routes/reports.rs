use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};

use super::REPORTS_CACHE_CONTROL;
use crate::api::models::ReportsQuery;
use crate::api::AppState;
use crate::errors::CatalogError;
use crate::query;

pub async fn get_reports(
    State(state): State<AppState>,
    Query(params): Query<ReportsQuery>,
) -> Result<impl IntoResponse, CatalogError> {
    let dataset = state.cache.snapshot().await?;
    let page = query::list_reports(&dataset, &params.filter(), params.pagination());

    Ok(([(header::CACHE_CONTROL, REPORTS_CACHE_CONTROL)], Json(page)))
}
