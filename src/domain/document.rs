//! Flat serialized ledger document
//!
//! The persisted form of the ledger: three ordered sections of flat
//! records. Cross-references are stored by key (a company serializes its
//! category as the category's key, an item its company likewise); the
//! in-memory links are rebuilt on load.

use crate::domain::Ledger;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Key of the referenced category.
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub timestamp: i64,
    /// Key of the referenced company.
    pub company: String,
}

/// The whole persisted data set. Section order matters for the two-phase
/// rebuild: categories carry no references, companies reference categories,
/// items reference companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub categories: Vec<CategoryRecord>,
    pub companies: Vec<CompanyRecord>,
    pub items: Vec<ItemRecord>,
}

impl From<&Ledger> for LedgerDocument {
    fn from(ledger: &Ledger) -> Self {
        LedgerDocument {
            categories: ledger
                .categories()
                .iter()
                .map(|category| CategoryRecord {
                    key: category.key.clone(),
                    name: category.name.clone(),
                    description: category.description.clone(),
                    color: category.color.clone(),
                })
                .collect(),
            companies: ledger
                .companies()
                .iter()
                .map(|company| CompanyRecord {
                    key: company.key.clone(),
                    name: company.name.clone(),
                    description: company.description.clone(),
                    category: company.category.key.clone(),
                })
                .collect(),
            items: ledger
                .items()
                .iter()
                .map(|item| ItemRecord {
                    id: item.id,
                    name: item.name.clone(),
                    description: item.description.clone(),
                    price: item.price,
                    timestamp: item.timestamp,
                    company: item.company.key.clone(),
                })
                .collect(),
        }
    }
}
