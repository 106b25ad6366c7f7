//! Domain entity definitions.

mod catalog;
mod menu_item;
mod order;

pub use catalog::Catalog;
pub use menu_item::{MenuItem, MenuItemId};
pub use order::{Order, OrderTotals};
