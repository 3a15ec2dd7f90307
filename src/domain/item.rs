//! Item entity - a recorded purchase

use crate::domain::Company;
use chrono::{DateTime, NaiveDate};
use std::rc::Rc;

/// A recorded purchase.
///
/// The purchase date is stored as epoch milliseconds; `date` and
/// `date_string` are derived from it. `id` is carried through
/// serialization but never assigned when recording.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub timestamp: i64,
    pub price: f64,
    pub company: Rc<Company>,
}

impl Item {
    pub fn new(
        id: Option<u64>,
        name: String,
        description: Option<String>,
        timestamp: i64,
        price: f64,
        company: Rc<Company>,
    ) -> Self {
        Item {
            id,
            name,
            description,
            timestamp,
            price,
            company,
        }
    }

    /// Purchase date derived from the stored timestamp.
    /// Timestamps outside chrono's representable range clamp to the epoch.
    pub fn date(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_default()
            .date_naive()
    }

    /// Purchase date formatted for display (DD-MM-YYYY).
    pub fn date_string(&self) -> String {
        self.date().format("%d-%m-%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn company() -> Rc<Company> {
        let category = Rc::new(Category::new(
            "c1".to_string(),
            "Circles".to_string(),
            None,
            "rgb(189, 84, 84)".to_string(),
        ));
        Rc::new(Company::new(
            "co1".to_string(),
            "Cube".to_string(),
            None,
            category,
        ))
    }

    #[test]
    fn test_date_from_timestamp() {
        // 2025-01-17T00:00:00Z
        let item = Item::new(None, "Bread".to_string(), None, 1737072000000, 3.2, company());
        assert_eq!(item.date(), NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
    }

    #[test]
    fn test_date_string_format() {
        let item = Item::new(None, "Bread".to_string(), None, 1737072000000, 3.2, company());
        assert_eq!(item.date_string(), "17-01-2025");
    }

    #[test]
    fn test_mid_day_timestamp_keeps_same_date() {
        // 2025-01-17T13:45:00Z
        let item = Item::new(
            None,
            "Milk".to_string(),
            None,
            1737072000000 + 13 * 3600 * 1000 + 45 * 60 * 1000,
            2.5,
            company(),
        );
        assert_eq!(item.date_string(), "17-01-2025");
    }

    #[test]
    fn test_company_link_is_shared() {
        let company = company();
        let item = Item::new(None, "Bread".to_string(), None, 0, 3.2, Rc::clone(&company));
        assert!(Rc::ptr_eq(&item.company, &company));
        assert_eq!(item.company.category.key, "c1");
    }
}
