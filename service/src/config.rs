//! Service configuration.
//!
//! Loaded from a TOML file when one is provided; every field has a default
//! so an empty file (or no file) yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use vouch_types::ServiceParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Tunable behavior parameters.
    pub params: ServiceParams,

    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            params: ServiceParams::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ServiceConfig = toml::from_str("").unwrap();
        assert_eq!(config.params.update_insert_retries, 3);
        assert!(!config.params.reject_inactive_submissions);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            log_level = "debug"

            [params]
            update_insert_retries = 5
            reject_inactive_submissions = true
            "#,
        )
        .unwrap();
        assert_eq!(config.params.update_insert_retries, 5);
        assert!(config.params.reject_inactive_submissions);
        assert_eq!(config.params.max_review_content_len, 10_000);
        assert_eq!(config.log_level, "debug");
    }
}
