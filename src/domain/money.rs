//! Currency formatting helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to whole cents.
#[must_use]
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount as dollars with exactly two decimal places, e.g. `$7.35`.
#[must_use]
pub fn format_money(amount: Decimal) -> String {
    format!("${}", round_cents(amount))
}

/// Formats a fractional rate as a percentage label, e.g. `0.05` becomes `5%`.
#[must_use]
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(7), "$7.00" ; "whole dollars are padded")]
    #[test_case(dec!(0.35), "$0.35" ; "cents only")]
    #[test_case(dec!(0.3500), "$0.35" ; "extra scale is trimmed")]
    #[test_case(dec!(0.125), "$0.13" ; "midpoint rounds away from zero")]
    #[test_case(dec!(0), "$0.00" ; "zero")]
    fn test_format_money(amount: Decimal, expected: &str) {
        assert_eq!(format_money(amount), expected);
    }

    #[test_case(dec!(0.05), "5%" ; "five percent")]
    #[test_case(dec!(0.0825), "8.25%" ; "fractional percent")]
    #[test_case(dec!(0), "0%" ; "zero rate")]
    fn test_format_percent(rate: Decimal, expected: &str) {
        assert_eq!(format_percent(rate), expected);
    }
}
