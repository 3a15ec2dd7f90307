//! Category entity

use crate::domain::ledger::Named;

/// A classification tag with a display color, referenced by companies.
///
/// Identity is the `key`; the name is only used for fuzzy lookup and display.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
}

impl Category {
    pub fn new(key: String, name: String, description: Option<String>, color: String) -> Self {
        Category {
            key,
            name,
            description,
            color,
        }
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}
