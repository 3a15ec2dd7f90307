//! Configuration management

use crate::error::{Result, SpendlogError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Currency symbol used when no other is configured.
pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub currency: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config. A blank currency falls back to the default.
    pub fn new(currency: &str) -> Self {
        let currency = if currency.trim().is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            currency.to_string()
        };
        Config {
            currency,
            created: Utc::now(),
        }
    }

    /// Load config from .spendlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".spendlog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpendlogError::NotLedgerDirectory(path.to_path_buf())
            } else {
                SpendlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SpendlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .spendlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let spendlog_dir = path.join(".spendlog");
        let config_path = spendlog_dir.join("config.toml");

        if !spendlog_dir.exists() {
            fs::create_dir(&spendlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SpendlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new("€");
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn test_blank_currency_falls_back_to_default() {
        let config = Config::new("  ");
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config::new("£");

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".spendlog").exists());
        assert!(temp.path().join(".spendlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.currency, config.currency);
        assert_eq!(loaded.created, config.created);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        assert!(result.is_err());
        match result.unwrap_err() {
            SpendlogError::NotLedgerDirectory(_) => {}
            _ => panic!("Expected NotLedgerDirectory error"),
        }
    }
}
