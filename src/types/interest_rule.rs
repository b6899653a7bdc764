//! Interest rule type
//!
//! A rule states the annual rate (in percent) that applies from its
//! effective date until the next rule's effective date.

use super::error::LedgerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Rate-effective-date pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestRule {
    date: NaiveDate,
    rule_id: String,
    rate: Decimal,
}

impl InterestRule {
    /// Create a rule, validating the rate
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidRate` unless `0 < rate < 100`.
    pub fn new(
        date: NaiveDate,
        rule_id: impl Into<String>,
        rate: Decimal,
    ) -> Result<Self, LedgerError> {
        if rate <= Decimal::ZERO || rate >= Decimal::ONE_HUNDRED {
            return Err(LedgerError::invalid_rate(rate));
        }

        Ok(InterestRule {
            date,
            rule_id: rule_id.into(),
            rate,
        })
    }

    /// Effective-from date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// Annual rate in percent
    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_rule() {
        let rule = InterestRule::new(june_15(), "RULE01", Decimal::new(25, 1)).unwrap();
        assert_eq!(rule.date(), june_15());
        assert_eq!(rule.rule_id(), "RULE01");
        assert_eq!(rule.rate(), Decimal::new(25, 1));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1, 0))]
    #[case::hundred(Decimal::ONE_HUNDRED)]
    #[case::above(Decimal::new(150, 0))]
    fn test_rate_outside_open_interval_is_rejected(#[case] rate: Decimal) {
        let result = InterestRule::new(june_15(), "RULE03", rate);
        assert!(matches!(result, Err(LedgerError::InvalidRate { .. })));
    }

    #[rstest]
    #[case::just_above_zero(Decimal::new(1, 2))]
    #[case::just_below_hundred(Decimal::new(9999, 2))]
    fn test_rate_near_bounds_is_accepted(#[case] rate: Decimal) {
        assert!(InterestRule::new(june_15(), "EDGE", rate).is_ok());
    }
}
