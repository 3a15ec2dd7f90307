//! spendlog - Terminal purchase ledger
//!
//! A command-line expense tracker that records purchases against companies
//! and categories, keeps the data set in a local keyed blob store, and
//! exports/imports the whole ledger as a single JSON document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SpendlogError;
