use std::path::Path;

use tracing::debug;

use super::types::BountydexConfig;
use crate::errors::CatalogError;
use crate::store::decode::MIN_RANKING_CAP;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<BountydexConfig, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(CatalogError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(config)
}

/// Parse the optional config file, falling back to defaults when none is given.
pub async fn load_config(path: Option<&Path>) -> Result<BountydexConfig, CatalogError> {
    match path {
        Some(path) => parse_config(path).await,
        None => Ok(BountydexConfig::default()),
    }
}

fn parse_config_str(content: &str) -> Result<BountydexConfig, CatalogError> {
    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(BountydexConfig::default());
    }

    let config: BountydexConfig = serde_yaml::from_str(content)?;
    validate_settings(&config)?;
    Ok(config)
}

/// Reject settings that would break decode invariants.
fn validate_settings(config: &BountydexConfig) -> Result<(), CatalogError> {
    if let Some(store) = &config.store {
        if let Some(cap) = store.ranking_cap {
            if cap < MIN_RANKING_CAP {
                return Err(CatalogError::Config(format!(
                    "store.ranking_cap must be at least {}, got {}",
                    MIN_RANKING_CAP, cap
                )));
            }
        }
        if store.preview_length == Some(0) {
            return Err(CatalogError::Config("store.preview_length must be positive".into()));
        }
        if store.link_prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(CatalogError::Config("store.link_prefix must not be empty".into()));
        }
        if store.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(CatalogError::Config("store.path must not be empty".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parses_full_config() {
        let config = parse_config_str(
            r#"
store:
  path: /srv/reports.json
  link_prefix: https://example.test/reports/
  ranking_cap: 25
  preview_length: 120
server:
  host: 127.0.0.1
  port: 9000
"#,
        )
        .unwrap();
        assert_eq!(config.store_path(), "/srv/reports.json");
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 9000);
        let options = config.decode_options();
        assert_eq!(options.ranking_cap, 25);
        assert_eq!(options.preview_length, 120);
        assert_eq!(options.link_prefix, "https://example.test/reports/");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config_str("  \n").unwrap();
        assert!(config.store.is_none());
        assert!(config.server.is_none());
    }

    #[test]
    fn test_ranking_cap_below_minimum_rejected() {
        let err = parse_config_str("store:\n  ranking_cap: 5\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_zero_preview_length_rejected() {
        let err = parse_config_str("store:\n  preview_length: 0\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_blank_link_prefix_rejected() {
        let err = parse_config_str("store:\n  link_prefix: \"  \"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_malformed_yaml_is_yaml_error() {
        let err = parse_config_str("store: [unclosed").unwrap_err();
        assert!(matches!(err, CatalogError::Yaml(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = parse_config(&dir.path().join("absent.yaml")).await.unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_config_without_path_uses_defaults() {
        let config = load_config(None).await.unwrap();
        assert!(config.store.is_none());
    }

    #[tokio::test]
    async fn test_parse_config_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bountydex.yaml");
        std::fs::write(&path, "server:\n  port: 3000\n").unwrap();
        let config = parse_config(&path).await.unwrap();
        assert_eq!(config.port(), 3000);
    }
}
