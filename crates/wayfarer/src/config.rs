//! Store configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Result, StoreError};

/// Configuration for a [`crate::Store`].
///
/// Every field has a default, so a partial JSON document (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Whether `initialize()` runs the seeder after connecting
    pub seed_on_connect:         bool,
    /// Whether filter values shaped like query operators are reported with a warning
    pub warn_on_query_operators: bool,
    /// Length of generated document ids; `None` uses the cuid2 default
    pub id_length:               Option<u16>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_on_connect:         true,
            warn_on_query_operators: true,
            id_length:               None,
        }
    }
}

impl StoreConfig {
    /// Shortest id length cuid2 can generate.
    pub const MIN_ID_LENGTH: u16 = 2;
    /// Longest id length cuid2 can generate.
    pub const MAX_ID_LENGTH: u16 = 32;

    /// A configuration that never seeds, useful when callers want an empty store.
    pub fn unseeded() -> Self {
        Self {
            seed_on_connect: false,
            ..Self::default()
        }
    }

    /// Checks that the configured values are usable.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` when valid, or `StoreError::Config` describing the
    /// first offending field.
    pub fn validate(&self) -> Result<()> {
        if let Some(length) = self.id_length {
            if !(Self::MIN_ID_LENGTH ..= Self::MAX_ID_LENGTH).contains(&length) {
                return Err(StoreError::Config {
                    message: format!(
                        "idLength must be between {} and {}, got {}",
                        Self::MIN_ID_LENGTH,
                        Self::MAX_ID_LENGTH,
                        length
                    ),
                });
            }
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON file containing a (possibly partial) `StoreConfig`.
    pub async fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        debug!("Loading store configuration from {:?}", path);
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| {
                StoreError::Config {
                    message: format!("cannot read {}: {}", path.display(), e),
                }
            })?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert!(config.seed_on_connect);
        assert!(config.warn_on_query_operators);
        assert_eq!(config.id_length, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = StoreConfig::from_json_str(r#"{"seedOnConnect": false}"#).unwrap();
        assert!(!config.seed_on_connect);
        assert!(config.warn_on_query_operators);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = StoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_id_length_out_of_range() {
        let result = StoreConfig::from_json_str(r#"{"idLength": 64}"#);
        assert!(matches!(result, Err(StoreError::Config { .. })));

        let result = StoreConfig::from_json_str(r#"{"idLength": 1}"#);
        assert!(matches!(result, Err(StoreError::Config { .. })));

        let config = StoreConfig::from_json_str(r#"{"idLength": 10}"#).unwrap();
        assert_eq!(config.id_length, Some(10));
    }

    #[test]
    fn test_unseeded() {
        let config = StoreConfig::unseeded();
        assert!(!config.seed_on_connect);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = StoreConfig::load("/definitely/not/here/wayfarer.json").await;
        assert!(matches!(result, Err(StoreError::Config { .. })));
    }
}
