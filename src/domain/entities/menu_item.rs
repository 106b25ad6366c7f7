//! Menu item entity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unique identifier for a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl MenuItemId {
    /// Returns the underlying u32 value.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MenuItemId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A single sellable item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    category: String,
    name: String,
    price: Decimal,
}

impl MenuItem {
    /// Creates a new menu item.
    #[must_use]
    pub fn new(
        id: impl Into<MenuItemId>,
        category: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the item ID.
    #[must_use]
    pub const fn id(&self) -> MenuItemId {
        self.id
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new(1, "Appetizers", "Samosa", dec!(5.00));

        assert_eq!(item.id().as_u32(), 1);
        assert_eq!(item.category(), "Appetizers");
        assert_eq!(item.name(), "Samosa");
        assert_eq!(item.price(), dec!(5));
    }

    #[test]
    fn test_menu_item_id_display() {
        assert_eq!(MenuItemId(42).to_string(), "42");
    }
}
