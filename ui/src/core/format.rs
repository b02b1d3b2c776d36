//! Formatting helpers for presenting prices.

use rust_decimal::{Decimal, RoundingStrategy};

/// `$35.00`
pub fn format_price(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// `$35` for whole amounts, `$35.50` otherwise. Used on menu cards.
pub fn format_price_short(value: Decimal) -> String {
    if value.fract().is_zero() {
        format!("${}", value.trunc())
    } else {
        format_price(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_two_decimals() {
        assert_eq!(format_price(Decimal::from(35)), "$35.00");
        assert_eq!(format_price(Decimal::new(4505, 2)), "$45.05");
        assert_eq!(format_price(Decimal::new(12345, 3)), "$12.35");
    }

    #[test]
    fn short_form_drops_zero_cents() {
        assert_eq!(format_price_short(Decimal::from(60)), "$60");
        assert_eq!(format_price_short(Decimal::new(605, 1)), "$60.50");
    }
}
