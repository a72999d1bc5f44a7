use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde_json::json;

use super::SUMMARY_CACHE_CONTROL;
use crate::api::AppState;
use crate::errors::CatalogError;
use crate::query;

/// Rankings shown on the overview page.
const OVERVIEW_RANKING_SIZE: usize = 10;

pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, CatalogError> {
    let dataset = state.cache.snapshot().await?;
    let rankings = query::top_rankings(&dataset, OVERVIEW_RANKING_SIZE);

    let tops_by_bug_type: Vec<_> = dataset
        .categories
        .by_bug_type
        .iter()
        .map(|c| json!({"bug_type": c.name}))
        .collect();
    let tops_by_program: Vec<_> = dataset
        .categories
        .by_program
        .iter()
        .map(|c| json!({"program": c.name}))
        .collect();

    Ok((
        [(header::CACHE_CONTROL, SUMMARY_CACHE_CONTROL)],
        Json(json!({
            "metadata": {"stats": dataset.stats},
            "categories": {
                "tops_by_bug_type": tops_by_bug_type,
                "tops_by_program": tops_by_program,
            },
            "rankings": rankings,
        })),
    ))
}
