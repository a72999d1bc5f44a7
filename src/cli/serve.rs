use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use tracing::{info, warn};

pub async fn handle_serve(args: ServeArgs, config: BountydexConfig) -> Result<(), CatalogError> {
    let store = args.store.unwrap_or_else(|| config.store_path());
    let host = args.host.unwrap_or_else(|| config.host());
    let port = args.port.unwrap_or_else(|| config.port());

    info!(host = %host, port, store = %store, "Starting API server");

    let state = api::create_app_state(&store, config.decode_options());

    // Warm the cache so a broken store shows up at startup, not on the first request.
    if let Err(e) = state.cache.snapshot().await {
        warn!(error = %e, "Store not loadable yet; requests will fail until it is");
    }

    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CatalogError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
