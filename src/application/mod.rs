//! Application layer - Use cases and orchestration

pub mod export;
pub mod import;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod record;

pub use export::{export, EXPORT_FILE_NAME};
pub use import::{import, ImportSummary};
pub use list_entries::{list_categories, list_companies, list_items, parse_display_date};
pub use manage_config::ConfigService;
pub use record::RecordService;
