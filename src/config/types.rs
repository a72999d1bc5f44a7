use serde::{Deserialize, Serialize};

use crate::store::decode::{
    DecodeOptions, DEFAULT_LINK_PREFIX, DEFAULT_PREVIEW_LENGTH, DEFAULT_RANKING_CAP,
};

pub const DEFAULT_STORE_PATH: &str = "./data/hackerone_reports.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BountydexConfig {
    pub store: Option<StoreConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub link_prefix: Option<String>,
    pub ranking_cap: Option<usize>,
    pub preview_length: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl BountydexConfig {
    pub fn store_path(&self) -> String {
        self.store
            .as_ref()
            .and_then(|s| s.path.clone())
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
    }

    pub fn host(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        let store = self.store.clone().unwrap_or_default();
        DecodeOptions {
            link_prefix: store
                .link_prefix
                .unwrap_or_else(|| DEFAULT_LINK_PREFIX.to_string()),
            ranking_cap: store.ranking_cap.unwrap_or(DEFAULT_RANKING_CAP),
            preview_length: store.preview_length.unwrap_or(DEFAULT_PREVIEW_LENGTH),
        }
    }
}
