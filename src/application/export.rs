//! Export ledger use case

use crate::error::Result;
use crate::infrastructure::FileStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name for exported ledger documents.
pub const EXPORT_FILE_NAME: &str = "checkout_data.json";

/// Write the serialized ledger document to a file. A missing target uses
/// the default file name in the current directory; a directory target
/// gets the default file name inside it. Returns the written path.
pub fn export(store: &FileStore, target: Option<&Path>) -> Result<PathBuf> {
    let ledger = store.load_ledger()?;
    let text = ledger.to_json()?;

    let path = match target {
        Some(path) if path.is_dir() => path.join(EXPORT_FILE_NAME),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(EXPORT_FILE_NAME),
    };

    fs::write(&path, text)?;
    Ok(path)
}
