//! Domain layer with the menu, order and notification model.

/// Checkout state machine.
pub mod checkout;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Currency formatting.
pub mod money;
/// Status notifications.
pub mod notification;

pub use checkout::CheckoutState;
pub use entities::{Catalog, MenuItem, MenuItemId, Order, OrderTotals};
pub use errors::CatalogError;
pub use notification::{Notification, NotificationId, NotificationLevel};
