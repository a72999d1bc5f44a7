use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let cache = state.cache.status().await;
    Json(json!({
        "status": "healthy",
        "service": "bountydex",
        "version": env!("CARGO_PKG_VERSION"),
        "build": {
            "git_hash": option_env!("GIT_HASH"),
            "timestamp": option_env!("BUILD_TIMESTAMP"),
        },
        "cache": cache,
    }))
}
