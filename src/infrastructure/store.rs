//! Keyed blob store
//!
//! The persistence adapter: a key-value text store backed by one file per
//! key under the `.spendlog` directory. The core treats it as bytes in,
//! bytes out; an absent key means a first run.

use crate::domain::Ledger;
use crate::error::{Result, SpendlogError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key for the ledger document.
pub const DATA_KEY: &str = "checkout_data";

/// Abstract key-value text store the core persists through.
pub trait BlobStore {
    /// Read the text stored under a key; `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write text under a key, replacing any previous value.
    fn write(&self, key: &str, text: &str) -> Result<()>;
}

/// File-backed implementation rooted at a `.spendlog` directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the ledger root by walking up from the current directory.
    /// First checks the SPENDLOG_ROOT environment variable, then falls
    /// back to discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SPENDLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_spendlog_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(SpendlogError::Config(format!(
                    "SPENDLOG_ROOT is set to '{}' but no .spendlog directory found. \
                    Run 'spendlog init' in that directory or unset SPENDLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the ledger root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_spendlog_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(SpendlogError::NotLedgerDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .spendlog directory
    fn has_spendlog_dir(path: &Path) -> bool {
        path.join(".spendlog").is_dir()
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_spendlog_dir(&self.root)
    }

    /// Create the .spendlog directory structure
    pub fn initialize(&self) -> Result<()> {
        let spendlog_dir = self.root.join(".spendlog");

        if spendlog_dir.exists() {
            return Err(SpendlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&spendlog_dir)?;
        Ok(())
    }

    /// Load configuration from .spendlog/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .spendlog/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(".spendlog").join(format!("{}.json", key))
    }

    /// Load the ledger from the store; an absent blob yields an empty
    /// ledger (first run).
    pub fn load_ledger(&self) -> Result<Ledger> {
        match self.read(DATA_KEY)? {
            Some(text) => Ledger::from_json(&text),
            None => Ok(Ledger::default()),
        }
    }

    /// Serialize and store the ledger under the fixed data key.
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        self.write(DATA_KEY, &ledger.to_json()?)
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, text: &str) -> Result<()> {
        let path = self.blob_path(key);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, text).map_err(SpendlogError::Io)
    }
}
