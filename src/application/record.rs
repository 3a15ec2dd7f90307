//! Record purchases use case
//!
//! Each operation loads the ledger from the blob store, mutates it in
//! memory, and saves it back. The CLI is stateless between invocations.

use crate::domain::{Category, Company, Item};
use crate::error::Result;
use crate::infrastructure::FileStore;
use std::rc::Rc;

/// Service for recording categories, companies and items
pub struct RecordService {
    store: FileStore,
}

impl RecordService {
    /// Create a new record service
    pub fn new(store: FileStore) -> Self {
        RecordService { store }
    }

    /// Add a category and persist the ledger.
    pub fn add_category(
        &self,
        key: &str,
        name: &str,
        color: &str,
        description: Option<String>,
    ) -> Result<Rc<Category>> {
        let mut ledger = self.store.load_ledger()?;
        let category = ledger.add_category(key, name, color, description)?;
        self.store.save_ledger(&ledger)?;
        Ok(category)
    }

    /// Add a company, resolving its category by name, and persist.
    pub fn add_company(
        &self,
        key: &str,
        name: &str,
        category_query: &str,
        description: Option<String>,
    ) -> Result<Rc<Company>> {
        let mut ledger = self.store.load_ledger()?;
        let company = ledger.add_company(key, name, category_query, description)?;
        self.store.save_ledger(&ledger)?;
        Ok(company)
    }

    /// Record a purchase, resolving its company by name, and persist.
    pub fn add_item(&self, name: &str, price: f64, company_query: &str) -> Result<Item> {
        let mut ledger = self.store.load_ledger()?;
        let item = ledger.add_item(name, price, company_query)?;
        self.store.save_ledger(&ledger)?;
        Ok(item)
    }
}
