//! List ledger entries use case

use crate::domain::{Category, Company, Item};
use crate::error::{Result, SpendlogError};
use crate::infrastructure::FileStore;
use chrono::NaiveDate;
use std::rc::Rc;

/// List items with optional date range and limit. The stored order is
/// newest-first, so a limit keeps the most recent purchases.
pub fn list_items(
    store: &FileStore,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Result<Vec<Item>> {
    let ledger = store.load_ledger()?;
    let mut items = ledger.items().to_vec();

    if let Some(from_date) = from {
        items.retain(|item| item.date() >= from_date);
    }
    if let Some(to_date) = to {
        items.retain(|item| item.date() <= to_date);
    }

    if let Some(n) = limit {
        items.truncate(n);
    }

    Ok(items)
}

/// List all companies in insertion order.
pub fn list_companies(store: &FileStore) -> Result<Vec<Rc<Company>>> {
    Ok(store.load_ledger()?.companies().to_vec())
}

/// List all categories in insertion order.
pub fn list_categories(store: &FileStore) -> Result<Vec<Rc<Category>>> {
    Ok(store.load_ledger()?.categories().to_vec())
}

/// Parse a display date (DD-MM-YYYY) as used by the list filters.
pub fn parse_display_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y").map_err(|_| {
        SpendlogError::Config(format!(
            "Invalid date format: '{}'. Expected DD-MM-YYYY",
            text
        ))
    })
}
