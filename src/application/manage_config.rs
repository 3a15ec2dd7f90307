//! Config management use case

use crate::error::{Result, SpendlogError};
use crate::infrastructure::{Config, FileStore};

/// Service for managing ledger configuration
pub struct ConfigService {
    store: FileStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "currency" => Ok(config.currency.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SpendlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: currency, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "currency" => {
                if value.trim().is_empty() {
                    return Err(SpendlogError::Config(
                        "Currency cannot be blank".to_string(),
                    ));
                }
                config.currency = value.to_string();
            }
            "created" => {
                return Err(SpendlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SpendlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: currency",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let store = FileStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        store.save_config(&Config::new("$")).unwrap();
        ConfigService::new(store)
    }

    #[test]
    fn test_get_currency() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("currency").unwrap(), "$");
    }

    #[test]
    fn test_set_currency() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        service.set("currency", "€").unwrap();
        assert_eq!(service.get("currency").unwrap(), "€");
    }

    #[test]
    fn test_set_blank_currency_fails() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("currency", "  ").is_err());
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("created").is_ok());
        assert!(service.set("created", "2025-01-17").is_err());
    }

    #[test]
    fn test_unknown_key_fails() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
