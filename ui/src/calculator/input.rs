//! Lenient parsing of the calculator's number inputs.

/// Guest count from a text field. Blank, invalid or non-positive input means one guest.
pub fn parse_guest_count(raw: &str) -> u32 {
    parse_clamped(raw).max(1)
}

/// Desired units from a text field. Blank or invalid input means zero.
pub fn parse_quantity(raw: &str) -> u32 {
    parse_clamped(raw)
}

fn parse_clamped(raw: &str) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0;
    }
    match raw.parse::<i64>() {
        Ok(value) => u32::try_from(value.max(0)).unwrap_or(u32::MAX),
        // Browsers hand number inputs over as "12.0" now and then.
        Err(_) => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .map(|value| value.floor().min(u32::MAX as f64) as u32)
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_count_is_at_least_one() {
        assert_eq!(parse_guest_count("35"), 35);
        assert_eq!(parse_guest_count(" 8 "), 8);
        assert_eq!(parse_guest_count("0"), 1);
        assert_eq!(parse_guest_count("-4"), 1);
        assert_eq!(parse_guest_count(""), 1);
        assert_eq!(parse_guest_count("many"), 1);
    }

    #[test]
    fn quantity_defaults_to_zero() {
        assert_eq!(parse_quantity("40"), 40);
        assert_eq!(parse_quantity("40.0"), 40);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-10"), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("99999999999"), u32::MAX);
    }
}
