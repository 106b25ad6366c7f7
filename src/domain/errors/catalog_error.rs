//! Catalog validation error types.

use thiserror::Error;

use crate::domain::entities::MenuItemId;

/// Reasons a menu catalog can be rejected.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CatalogError {
    /// The catalog has no items.
    #[error("catalog contains no items")]
    Empty,

    /// Two items share an id.
    #[error("duplicate menu item id {id}")]
    DuplicateId { id: MenuItemId },

    /// An item is priced below zero.
    #[error("menu item {id} has a negative price")]
    NegativePrice { id: MenuItemId },
}
