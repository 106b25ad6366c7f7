use rust_decimal::Decimal;

/// Payment lifecycle: `Idle -> Processing -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// Waiting for the customer.
    #[default]
    Idle,
    /// Payment in flight.
    Processing {
        /// Amount being charged.
        total: Decimal,
    },
}

impl CheckoutState {
    /// Whether a payment is in flight.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        matches!(self, Self::Processing { .. })
    }
}
