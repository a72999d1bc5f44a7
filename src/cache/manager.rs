//! Snapshot cache over the store file.
//!
//! Every access stats the store. The decoded dataset is rebuilt only when the
//! store's modification time differs from the one recorded with the current
//! snapshot. Readers get an `Arc` to an immutable dataset, so a rebuild never
//! disturbs queries already in flight.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::errors::CatalogError;
use crate::models::DecodedDataset;
use crate::store::StoreLoader;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    /// Nothing decoded yet.
    Empty,
    /// The snapshot matches the store on disk.
    Fresh,
    /// The store changed (or vanished) since the snapshot was built.
    Stale,
}

/// Point-in-time view of the cache for health reporting.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub state: CacheState,
    pub loads: u64,
    pub reports: Option<usize>,
    pub loaded_at: Option<DateTime<Utc>>,
}

struct Snapshot {
    modified: SystemTime,
    dataset: Arc<DecodedDataset>,
    loaded_at: DateTime<Utc>,
}

#[derive(Default)]
struct Slot {
    current: Option<Snapshot>,
    /// mtime of the last store version that failed to decode.
    failed: Option<SystemTime>,
}

pub struct DatasetCache {
    path: PathBuf,
    loader: StoreLoader,
    slot: RwLock<Slot>,
    /// Serializes rebuilds so concurrent misses decode the store once.
    rebuild_lock: Mutex<()>,
    loads: AtomicU64,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>, loader: StoreLoader) -> Self {
        Self {
            path: path.into(),
            loader,
            slot: RwLock::new(Slot::default()),
            rebuild_lock: Mutex::new(()),
            loads: AtomicU64::new(0),
        }
    }

    /// Number of times the loader has been invoked.
    pub fn loads(&self) -> u64 {
        self.loads.load(Ordering::SeqCst)
    }

    /// Return a dataset matching the store on disk, rebuilding it if needed.
    ///
    /// When the store cannot be read or decoded, the previous snapshot is
    /// served if there is one. Only a failure with nothing to fall back on
    /// surfaces as `DataUnavailable`.
    pub async fn snapshot(&self) -> Result<Arc<DecodedDataset>, CatalogError> {
        let modified = match self.store_modified().await {
            Ok(modified) => modified,
            Err(e) => return self.serve_previous(e).await,
        };

        if let Some(dataset) = self.lookup(modified).await {
            debug!(path = %self.path.display(), "Store cache hit");
            return Ok(dataset);
        }

        let _guard = self.rebuild_lock.lock().await;

        // The store may have changed again while we waited, and another
        // caller may already have rebuilt it.
        let modified = match self.store_modified().await {
            Ok(modified) => modified,
            Err(e) => return self.serve_previous(e).await,
        };
        if let Some(dataset) = self.lookup(modified).await {
            return Ok(dataset);
        }

        self.rebuild(modified).await
    }

    pub async fn state(&self) -> CacheState {
        let modified = self.store_modified().await.ok();
        let slot = self.slot.read().await;
        match (&slot.current, modified) {
            (None, _) => CacheState::Empty,
            (Some(snapshot), Some(modified)) if snapshot.modified == modified => CacheState::Fresh,
            (Some(_), _) => CacheState::Stale,
        }
    }

    pub async fn status(&self) -> CacheStatus {
        let state = self.state().await;
        let slot = self.slot.read().await;
        CacheStatus {
            state,
            loads: self.loads(),
            reports: slot.current.as_ref().map(|s| s.dataset.reports.len()),
            loaded_at: slot.current.as_ref().map(|s| s.loaded_at),
        }
    }

    async fn store_modified(&self) -> Result<SystemTime, CatalogError> {
        tokio::fs::metadata(&self.path)
            .await
            .and_then(|meta| meta.modified())
            .map_err(|e| {
                CatalogError::DataUnavailable(format!(
                    "Failed to stat store {}: {}",
                    self.path.display(),
                    e
                ))
            })
    }

    /// Cached dataset usable for `modified`, if any.
    ///
    /// A store version that already failed to decode keeps serving the
    /// previous snapshot instead of being decoded again.
    async fn lookup(&self, modified: SystemTime) -> Option<Arc<DecodedDataset>> {
        let slot = self.slot.read().await;
        let snapshot = slot.current.as_ref()?;
        if snapshot.modified == modified || slot.failed == Some(modified) {
            Some(snapshot.dataset.clone())
        } else {
            None
        }
    }

    async fn rebuild(&self, modified: SystemTime) -> Result<Arc<DecodedDataset>, CatalogError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        info!(path = %self.path.display(), "Store changed, rebuilding dataset");

        match self.loader.load(&self.path).await {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                let mut slot = self.slot.write().await;
                slot.current = Some(Snapshot {
                    modified,
                    dataset: dataset.clone(),
                    loaded_at: Utc::now(),
                });
                slot.failed = None;
                Ok(dataset)
            }
            Err(e) => {
                let mut slot = self.slot.write().await;
                slot.failed = Some(modified);
                match &slot.current {
                    Some(snapshot) => {
                        warn!(error = %e, "Store rebuild failed, serving previous snapshot");
                        Ok(snapshot.dataset.clone())
                    }
                    None => Err(e),
                }
            }
        }
    }

    async fn serve_previous(&self, e: CatalogError) -> Result<Arc<DecodedDataset>, CatalogError> {
        let slot = self.slot.read().await;
        match &slot.current {
            Some(snapshot) => {
                warn!(error = %e, "Store unreadable, serving previous snapshot");
                Ok(snapshot.dataset.clone())
            }
            None => Err(e),
        }
    }
}
