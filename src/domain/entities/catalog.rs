//! Menu catalog.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::MenuItem;
use crate::domain::errors::CatalogError;

/// Immutable, validated list of menu items in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Builds a catalog from items, enforcing unique ids and non-negative prices.
    ///
    /// # Errors
    /// Returns `CatalogError` if the list is empty, an id repeats, or a price is negative.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(CatalogError::DuplicateId { id: item.id() });
            }
            if item.price() < Decimal::ZERO {
                return Err(CatalogError::NegativePrice { id: item.id() });
            }
        }

        Ok(Self { items })
    }

    /// The kiosk's built-in menu.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            items: vec![
                MenuItem::new(1, "Appetizers", "Samosa", dec!(5.00)),
                MenuItem::new(2, "Appetizers", "Spring Rolls", dec!(6.50)),
                MenuItem::new(3, "Main Courses", "Butter Chicken", dec!(15.99)),
                MenuItem::new(4, "Main Courses", "Vegetable Biryani", dec!(13.50)),
                MenuItem::new(5, "Main Courses", "Lamb Curry", dec!(18.75)),
                MenuItem::new(6, "Drinks", "Coca-Cola", dec!(2.00)),
                MenuItem::new(7, "Drinks", "Mango Lassi", dec!(4.50)),
                MenuItem::new(8, "Desserts", "Gulab Jamun", dec!(5.50)),
            ],
        }
    }

    /// Returns all items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category()) {
                categories.push(item.category());
            }
        }
        categories
    }

    /// Items whose category equals `category`, in catalog order.
    #[must_use]
    pub fn items_in(&self, category: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
