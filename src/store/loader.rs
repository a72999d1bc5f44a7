use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use super::decode::{decode_store, DecodeOptions};
use crate::errors::CatalogError;
use crate::models::DecodedDataset;

/// Reads a store file from disk and decodes it.
#[derive(Debug, Clone, Default)]
pub struct StoreLoader {
    options: DecodeOptions,
}

impl StoreLoader {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub async fn load(&self, path: &Path) -> Result<DecodedDataset, CatalogError> {
        let started = Instant::now();
        debug!(path = %path.display(), "Reading store");

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            CatalogError::DataUnavailable(format!("Failed to read store {}: {}", path.display(), e))
        })?;

        let dataset = decode_store(&bytes, &self.options)?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            reports = dataset.reports.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Decoded store"
        );
        Ok(dataset)
    }
}
