//! Initialize ledger use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new ledger at the specified path.
pub fn init(path: &Path, currency: &str) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());

    // Initialize .spendlog directory
    store.initialize()?;

    let config = Config::new(currency);
    store.save_config(&config)?;

    println!("Initialized spendlog ledger at {}", path.display());
    println!("Currency: {}", config.currency);

    Ok(())
}
