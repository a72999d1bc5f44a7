pub mod manager;

pub use manager::{CacheState, CacheStatus, DatasetCache};
