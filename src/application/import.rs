//! Import ledger use case

use crate::domain::Ledger;
use crate::error::{Result, SpendlogError};
use crate::infrastructure::FileStore;
use std::fs;
use std::path::Path;

/// File extensions accepted as ledger documents.
const ACCEPTED_EXTENSIONS: [&str; 2] = ["json", "txt"];

/// Counts of what an import brought in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub categories: usize,
    pub companies: usize,
    pub items: usize,
}

/// Replace the stored ledger with the document in the given file.
///
/// Only text-typed files are accepted; anything else is rejected before
/// the file is read. The document is parsed and its references resolved
/// as a whole before the store is written, so a failed import leaves the
/// previous data set intact.
pub fn import(store: &FileStore, source: &Path) -> Result<ImportSummary> {
    let accepted = source
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| ACCEPTED_EXTENSIONS.contains(&extension.to_lowercase().as_str()))
        .unwrap_or(false);
    if !accepted {
        return Err(SpendlogError::UnsupportedFileType(source.to_path_buf()));
    }

    let text = fs::read_to_string(source)?;
    let ledger = Ledger::from_json(&text)?;
    store.save_ledger(&ledger)?;

    Ok(ImportSummary {
        categories: ledger.categories().len(),
        companies: ledger.companies().len(),
        items: ledger.items().len(),
    })
}
