//! Output formatting utilities

use crate::domain::{Category, Company, Item};
use std::rc::Rc;

/// Format a list of purchases for display, newest first.
pub fn format_item_list(items: &[Item], currency: &str) -> String {
    if items.is_empty() {
        return "No items recorded".to_string();
    }

    let mut output = String::new();
    for item in items {
        let price = format!("{}{:.2}", currency, item.price);
        output.push_str(&format!(
            "{}  {:>10}  {}  ({})\n",
            item.date_string(),
            price,
            item.name,
            item.company.name
        ));
    }
    output
}

/// Format a list of categories for display.
pub fn format_category_list(categories: &[Rc<Category>]) -> String {
    if categories.is_empty() {
        return "No categories recorded".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!(
            "{}  {}  {}\n",
            category.key, category.name, category.color
        ));
    }
    output
}

/// Format a list of companies for display, each with its category name.
pub fn format_company_list(companies: &[Rc<Company>]) -> String {
    if companies.is_empty() {
        return "No companies recorded".to_string();
    }

    let mut output = String::new();
    for company in companies {
        output.push_str(&format!(
            "{}  {}  [{}]\n",
            company.key, company.name, company.category.name
        ));
    }
    output
}
