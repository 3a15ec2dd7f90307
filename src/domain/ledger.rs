//! In-memory ledger store
//!
//! Holds the three ordered collections (categories, companies, items) and
//! implements add/lookup/serialize/deserialize. Ordering contract: items
//! are newest-first (prepend on add); categories and companies keep
//! insertion order (append).

use crate::domain::{Category, Company, Item, LedgerDocument};
use crate::error::{Result, SpendlogError};
use chrono::Utc;
use std::collections::HashMap;
use std::rc::Rc;

/// Entities resolvable by fuzzy name lookup.
pub trait Named {
    fn name(&self) -> &str;
}

/// Case-insensitive substring match, scanning front-to-back. Returns the
/// first entity whose name contains the query, or the collection's first
/// element when nothing matches (default-or-first policy). `None` only
/// when the collection is empty.
pub fn find_by_name_contains<'a, T: Named>(entries: &'a [Rc<T>], query: &str) -> Option<&'a Rc<T>> {
    let first = entries.first()?;
    let query = query.to_lowercase();
    Some(
        entries
            .iter()
            .find(|entry| entry.name().to_lowercase().contains(&query))
            .unwrap_or(first),
    )
}

/// The in-memory data set: all collections, their cross-references, and
/// the conversion to/from the flat persisted document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    categories: Vec<Rc<Category>>,
    companies: Vec<Rc<Company>>,
    items: Vec<Item>,
}

impl Ledger {
    pub fn categories(&self) -> &[Rc<Category>] {
        &self.categories
    }

    pub fn companies(&self) -> &[Rc<Company>] {
        &self.companies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Resolve a category by fuzzy name lookup.
    pub fn find_category(&self, query: &str) -> Result<&Rc<Category>> {
        find_by_name_contains(&self.categories, query)
            .ok_or(SpendlogError::NothingRecorded("categories"))
    }

    /// Resolve a company by fuzzy name lookup.
    pub fn find_company(&self, query: &str) -> Result<&Rc<Company>> {
        find_by_name_contains(&self.companies, query)
            .ok_or(SpendlogError::NothingRecorded("companies"))
    }

    /// Add a category. Only the key is required; name and color may be
    /// empty. Appends in insertion order.
    pub fn add_category(
        &mut self,
        key: &str,
        name: &str,
        color: &str,
        description: Option<String>,
    ) -> Result<Rc<Category>> {
        if key.trim().is_empty() {
            return Err(SpendlogError::MissingField("key"));
        }

        let category = Rc::new(Category::new(
            key.to_string(),
            name.to_string(),
            description,
            color.to_string(),
        ));
        self.categories.push(Rc::clone(&category));
        Ok(category)
    }

    /// Add a company, resolving its category by fuzzy name lookup.
    /// Appends in insertion order.
    pub fn add_company(
        &mut self,
        key: &str,
        name: &str,
        category_query: &str,
        description: Option<String>,
    ) -> Result<Rc<Company>> {
        if key.trim().is_empty() {
            return Err(SpendlogError::MissingField("key"));
        }
        if name.trim().is_empty() {
            return Err(SpendlogError::MissingField("name"));
        }
        if category_query.trim().is_empty() {
            return Err(SpendlogError::MissingField("category"));
        }

        let category = Rc::clone(self.find_category(category_query)?);
        let company = Rc::new(Company::new(
            key.to_string(),
            name.to_string(),
            description,
            category,
        ));
        self.companies.push(Rc::clone(&company));
        Ok(company)
    }

    /// Record a purchase stamped with the current wall-clock time.
    pub fn add_item(&mut self, name: &str, price: f64, company_query: &str) -> Result<Item> {
        self.add_item_at(name, price, company_query, Utc::now().timestamp_millis())
    }

    /// Record a purchase with an explicit timestamp (epoch milliseconds),
    /// resolving its company by fuzzy name lookup. Prepends: the items
    /// collection is a newest-first purchase feed.
    pub fn add_item_at(
        &mut self,
        name: &str,
        price: f64,
        company_query: &str,
        timestamp: i64,
    ) -> Result<Item> {
        if name.trim().is_empty() {
            return Err(SpendlogError::MissingField("name"));
        }
        if !price.is_finite() {
            return Err(SpendlogError::InvalidPrice(price));
        }

        let company = Rc::clone(self.find_company(company_query)?);
        let item = Item::new(None, name.to_string(), None, timestamp, price, company);
        self.items.insert(0, item.clone());
        Ok(item)
    }

    /// Serialize the ledger as the flat JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&LedgerDocument::from(self))?)
    }

    /// Parse a JSON document into a new ledger.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: LedgerDocument = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    /// Rebuild the entity graph from a flat document in two phases:
    /// categories first (no references), then companies resolved against
    /// the category key index, then items resolved against the company
    /// key index. An unknown key is a hard error. Duplicate keys are
    /// last-write-wins in the index; both entries stay in the collection.
    pub fn from_document(document: LedgerDocument) -> Result<Self> {
        let mut categories = Vec::with_capacity(document.categories.len());
        let mut categories_by_key: HashMap<String, Rc<Category>> = HashMap::new();
        for record in document.categories {
            let category = Rc::new(Category::new(
                record.key,
                record.name,
                record.description,
                record.color,
            ));
            categories_by_key.insert(category.key.clone(), Rc::clone(&category));
            categories.push(category);
        }

        let mut companies = Vec::with_capacity(document.companies.len());
        let mut companies_by_key: HashMap<String, Rc<Company>> = HashMap::new();
        for record in document.companies {
            let category = match categories_by_key.get(&record.category) {
                Some(category) => Rc::clone(category),
                None => return Err(SpendlogError::UnknownCategory(record.category)),
            };
            let company = Rc::new(Company::new(
                record.key,
                record.name,
                record.description,
                category,
            ));
            companies_by_key.insert(company.key.clone(), Rc::clone(&company));
            companies.push(company);
        }

        let mut items = Vec::with_capacity(document.items.len());
        for record in document.items {
            let company = match companies_by_key.get(&record.company) {
                Some(company) => Rc::clone(company),
                None => return Err(SpendlogError::UnknownCompany(record.company)),
            };
            items.push(Item::new(
                record.id,
                record.name,
                record.description,
                record.timestamp,
                record.price,
                company,
            ));
        }

        Ok(Ledger {
            categories,
            companies,
            items,
        })
    }

    /// Replace the whole data set from a JSON document. Atomic: on any
    /// parse or reference error the current collections are untouched.
    pub fn replace_from_json(&mut self, text: &str) -> Result<()> {
        *self = Ledger::from_json(text)?;
        Ok(())
    }
}
