//! Order (cart) entity and derived totals.

use rust_decimal::Decimal;

use super::MenuItem;

/// Subtotal, tax and total derived from an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    /// Sum of line prices.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate`.
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub total: Decimal,
}

impl OrderTotals {
    /// Computes totals for the given items.
    #[must_use]
    pub fn compute<'a>(items: impl IntoIterator<Item = &'a MenuItem>, tax_rate: Decimal) -> Self {
        let subtotal: Decimal = items.into_iter().map(MenuItem::price).sum();
        let tax = subtotal * tax_rate;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// The active cart. Lines have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<MenuItem>,
}

impl Order {
    /// Creates an empty order.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends an item.
    pub fn push(&mut self, item: MenuItem) {
        self.lines.push(item);
    }

    /// Removes the line at `position`, or returns `None` if out of bounds.
    pub fn remove(&mut self, position: usize) -> Option<MenuItem> {
        (position < self.lines.len()).then(|| self.lines.remove(position))
    }

    /// Drops every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[MenuItem] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the order has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recomputes totals from the current lines.
    #[must_use]
    pub fn totals(&self, tax_rate: Decimal) -> OrderTotals {
        OrderTotals::compute(&self.lines, tax_rate)
    }
}
