//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{AddCommands, Cli, Commands};
pub use output::{format_category_list, format_company_list, format_item_list};
