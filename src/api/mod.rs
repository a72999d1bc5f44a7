pub mod routes;
pub mod models;
pub mod errors;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::cache::DatasetCache;
use crate::store::{DecodeOptions, StoreLoader};

#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<DatasetCache>,
}

pub fn create_app_state(store_path: impl Into<PathBuf>, options: DecodeOptions) -> AppState {
    AppState {
        cache: Arc::new(DatasetCache::new(store_path, StoreLoader::new(options))),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/reports", get(routes::reports::get_reports))
        .route("/api/categories", get(routes::categories::get_categories))
        .route("/api/stats", get(routes::stats::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
