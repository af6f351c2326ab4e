//! Percentage formatting shared by the display and the email template

use rust_decimal::{Decimal, RoundingStrategy};

/// Trailing zeros dropped: `3.20` -> `3.2`, `5.0` -> `5`.
pub fn format_apy(apy: Decimal) -> String {
    canonical_zero(apy).normalize().to_string()
}

/// Always one decimal place, half away from zero.
pub fn format_one_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", canonical_zero(rounded))
}

/// `+` prefix only for positive deltas.
pub fn format_signed_delta(delta: Decimal) -> String {
    let body = format_one_decimal(delta);
    if delta > Decimal::ZERO {
        format!("+{}", body)
    } else {
        body
    }
}

fn canonical_zero(value: Decimal) -> Decimal {
    if value.is_zero() { Decimal::ZERO } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_apy() {
        assert_eq!(format_apy(dec!(3.2)), "3.2");
        assert_eq!(format_apy(dec!(3.20)), "3.2");
        assert_eq!(format_apy(dec!(5.0)), "5");
        assert_eq!(format_apy(dec!(0)), "0");
    }

    #[test]
    fn test_format_one_decimal() {
        assert_eq!(format_one_decimal(dec!(1.9)), "1.9");
        assert_eq!(format_one_decimal(dec!(0)), "0.0");
        assert_eq!(format_one_decimal(dec!(2.25)), "2.3");
        assert_eq!(format_one_decimal(dec!(2.24)), "2.2");
        assert_eq!(format_one_decimal(dec!(3)), "3.0");
    }

    #[test]
    fn test_format_signed_delta() {
        assert_eq!(format_signed_delta(dec!(1.9)), "+1.9");
        assert_eq!(format_signed_delta(dec!(0.0)), "0.0");
        assert_eq!(format_signed_delta(dec!(-0.4)), "-0.4");
    }
}
