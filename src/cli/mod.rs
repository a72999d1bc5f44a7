pub mod commands;
pub mod serve;
pub mod query;
pub mod categories;
pub mod top;
pub mod validate;

pub use commands::{Cli, Commands};

use std::sync::Arc;

use crate::cache::DatasetCache;
use crate::config::BountydexConfig;
use crate::errors::CatalogError;
use crate::models::DecodedDataset;
use crate::store::StoreLoader;

/// Load the store named on the command line, or the configured one.
pub(crate) async fn open_snapshot(
    store: Option<&str>,
    config: &BountydexConfig,
) -> Result<Arc<DecodedDataset>, CatalogError> {
    let path = store.map(str::to_string).unwrap_or_else(|| config.store_path());
    let cache = DatasetCache::new(path, StoreLoader::new(config.decode_options()));
    cache.snapshot().await
}
