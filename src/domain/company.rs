//! Company entity

use crate::domain::ledger::Named;
use crate::domain::Category;
use std::rc::Rc;

/// A vendor/organization, referenced by items.
///
/// Holds a shared link to exactly one category; the link is serialized by
/// the category's key, not by embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub key: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Rc<Category>,
}

impl Company {
    pub fn new(
        key: String,
        name: String,
        description: Option<String>,
        category: Rc<Category>,
    ) -> Self {
        Company {
            key,
            name,
            description,
            category,
        }
    }
}

impl Named for Company {
    fn name(&self) -> &str {
        &self.name
    }
}
