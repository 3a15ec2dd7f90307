//! Error types for spendlog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the spendlog application
#[derive(Debug, Error)]
pub enum SpendlogError {
    #[error("Not a spendlog directory: {0}")]
    NotLedgerDirectory(PathBuf),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("No {0} recorded yet")]
    NothingRecorded(&'static str),

    #[error("Unknown category key: '{0}'")]
    UnknownCategory(String),

    #[error("Unknown company key: '{0}'")]
    UnknownCompany(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Ledger document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SpendlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SpendlogError::NotLedgerDirectory(_) => 2,
            SpendlogError::MissingField(_) | SpendlogError::InvalidPrice(_) => 3,
            SpendlogError::NothingRecorded(_) => 4,
            SpendlogError::UnknownCategory(_) | SpendlogError::UnknownCompany(_) => 5,
            SpendlogError::UnsupportedFileType(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SpendlogError::NotLedgerDirectory(path) => {
                format!(
                    "Not a spendlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'spendlog init' in this directory to create a new ledger\n\
                    • Navigate to an existing spendlog directory\n\
                    • Set SPENDLOG_ROOT environment variable to your ledger path",
                    path.display()
                )
            }
            SpendlogError::NothingRecorded(collection) => {
                format!(
                    "No {} recorded yet\n\n\
                    Suggestions:\n\
                    • Add a category first: spendlog add category <key> <name>\n\
                    • Then a company: spendlog add company <key> <name> <category>\n\
                    • Items always reference a company, companies a category",
                    collection
                )
            }
            SpendlogError::UnsupportedFileType(path) => {
                format!(
                    "Unsupported file type: {}\n\n\
                    Only text ledger documents are accepted:\n\
                    • .json (the export format)\n\
                    • .txt\n\n\
                    Example: spendlog import checkout_data.json",
                    path.display()
                )
            }
            SpendlogError::MissingField(field) => {
                format!(
                    "Missing required field: {}\n\n\
                    Required fields must be non-blank after trimming.\n\
                    Example: spendlog add item \"Bread\" 3.20 \"Cube\"",
                    field
                )
            }
            SpendlogError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected format: DD-MM-YYYY\n\
                        Example: spendlog list items --from 17-01-2025 --to 31-01-2025",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SpendlogError
pub type Result<T> = std::result::Result<T, SpendlogError>;
