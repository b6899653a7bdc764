//! Monetary helpers
//!
//! Every monetary value in the ledger is kept at two decimal places and
//! rounded half-up (ties away from zero).

use super::error::LedgerError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Decimal places retained for amounts and balances
pub const MONEY_SCALE: u32 = 2;

/// Round a value half-up to two decimal places
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse amount text into a decimal
///
/// Only checks that the text is a decimal number; sign and rounding are the
/// account's concern.
///
/// # Errors
///
/// Returns `LedgerError::InvalidAmount` when the text is not a decimal.
pub fn parse_amount(text: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(text.trim()).map_err(|_| LedgerError::invalid_amount(text))
}

/// Parse an interest rate given in percent
///
/// # Errors
///
/// Returns `LedgerError::InvalidRate` when the text is not a decimal.
pub fn parse_rate(text: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(text.trim()).map_err(|_| LedgerError::invalid_rate(text))
}

/// Render a monetary value with exactly two decimals
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", round_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::tie_rounds_up("0.005", "0.01")]
    #[case::below_tie("0.0049", "0.00")]
    #[case::negative_tie("-0.005", "-0.01")]
    #[case::already_scaled("100.00", "100.00")]
    #[case::repeating("0.98630136986", "0.99")]
    fn test_round_money(#[case] input: &str, #[case] expected: &str) {
        let rounded = round_money(Decimal::from_str(input).unwrap());
        assert_eq!(rounded, Decimal::from_str(expected).unwrap());
    }

    #[rstest]
    #[case::plain("100.00", Decimal::new(10000, 2))]
    #[case::integer("7", Decimal::new(7, 0))]
    #[case::negative("-10.00", Decimal::new(-1000, 2))]
    fn test_parse_amount(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::empty("")]
    #[case::double_dot("1.2.3")]
    fn test_parse_amount_rejects_non_numbers(#[case] input: &str) {
        assert_eq!(parse_amount(input), Err(LedgerError::invalid_amount(input)));
    }

    #[test]
    fn test_parse_rate_rejects_non_numbers() {
        assert_eq!(parse_rate("ten"), Err(LedgerError::invalid_rate("ten")));
        assert_eq!(parse_rate("2.20").unwrap(), Decimal::new(220, 2));
    }

    #[rstest]
    #[case::pads(Decimal::new(25, 1), "2.50")]
    #[case::integer(Decimal::new(30, 0), "30.00")]
    #[case::rounds(Decimal::new(12345, 3), "12.35")]
    fn test_format_money(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_money(value), expected);
    }
}
