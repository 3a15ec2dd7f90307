//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spendlog")]
#[command(about = "Terminal purchase ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new ledger
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Currency symbol shown before prices
        #[arg(short, long, default_value = "$")]
        currency: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Add a category, company or item to the ledger
    Add {
        #[command(subcommand)]
        entry: AddCommands,
    },

    /// List ledger entries
    List {
        /// What to list (items, companies, categories)
        #[arg(default_value = "items")]
        target: String,

        /// Earliest purchase date to include (DD-MM-YYYY, items only)
        #[arg(long)]
        from: Option<String>,

        /// Latest purchase date to include (DD-MM-YYYY, items only)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of items to show (default: 10)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Export the ledger document to a file
    Export {
        /// Target file or directory (default: checkout_data.json)
        path: Option<PathBuf>,
    },

    /// Replace the ledger with a previously exported document
    Import {
        /// Source file (.json or .txt)
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum AddCommands {
    /// Add a category (only the key is required to be non-blank)
    Category {
        /// Unique key used for cross-referencing
        key: String,

        /// Display name
        name: String,

        /// Display color hint (e.g. "rgb(189, 84, 84)")
        #[arg(long, default_value = "")]
        color: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Add a company belonging to a category
    Company {
        /// Unique key used for cross-referencing
        key: String,

        /// Display name
        name: String,

        /// Category name query (case-insensitive substring)
        category: String,

        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Record a purchase from a company
    Item {
        /// What was purchased
        name: String,

        /// Price paid (may be fractional)
        price: f64,

        /// Company name query (case-insensitive substring)
        company: String,
    },
}
