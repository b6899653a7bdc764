//! Interest rule table
//!
//! This module provides the `RuleTable` component that holds the ledger-wide
//! interest rules. Rules are shared by every account.
//!
//! # Invariants
//!
//! - Rules are sorted ascending by effective date
//! - At most one rule exists per effective date; a later submission on the
//!   same date replaces the earlier one in place

use crate::types::InterestRule;
use chrono::NaiveDate;

/// Date-sorted table of interest rules
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<InterestRule>,
}

impl RuleTable {
    /// Create an empty rule table
    pub fn new() -> Self {
        RuleTable { rules: Vec::new() }
    }

    /// Insert a rule, replacing any rule with the same effective date
    ///
    /// # Returns
    ///
    /// The replaced rule, if one existed on that date
    pub fn upsert(&mut self, rule: InterestRule) -> Option<InterestRule> {
        match self
            .rules
            .binary_search_by_key(&rule.date(), |existing| existing.date())
        {
            Ok(index) => Some(std::mem::replace(&mut self.rules[index], rule)),
            Err(index) => {
                self.rules.insert(index, rule);
                None
            }
        }
    }

    /// All rules, ascending by effective date
    pub fn rules(&self) -> &[InterestRule] {
        &self.rules
    }

    /// The latest rule effective on or before `date`
    pub fn rule_for(&self, date: NaiveDate) -> Option<&InterestRule> {
        let applicable = self.rules.partition_point(|rule| rule.date() <= date);
        applicable.checked_sub(1).map(|index| &self.rules[index])
    }

    /// Effective dates in `first..=last`
    pub fn effective_dates_between(
        &self,
        first: NaiveDate,
        last: NaiveDate,
    ) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rules
            .iter()
            .map(|rule| rule.date())
            .filter(move |date| first <= *date && *date <= last)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_date;
    use rust_decimal::Decimal;

    fn rule(date: &str, id: &str, rate: i64) -> InterestRule {
        InterestRule::new(parse_date(date).unwrap(), id, Decimal::new(rate, 2)).unwrap()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = RuleTable::new();
        assert!(table.is_empty());
        assert_eq!(table.rule_for(parse_date("20230601").unwrap()), None);
    }

    #[test]
    fn test_upsert_keeps_rules_sorted() {
        let mut table = RuleTable::new();
        table.upsert(rule("20230615", "RULE03", 220));
        table.upsert(rule("20230101", "RULE01", 195));
        table.upsert(rule("20230520", "RULE02", 190));

        let ids: Vec<&str> = table.rules().iter().map(|r| r.rule_id()).collect();
        assert_eq!(ids, vec!["RULE01", "RULE02", "RULE03"]);
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let mut table = RuleTable::new();
        assert_eq!(table.upsert(rule("20230615", "RULE01", 250)), None);

        let replaced = table.upsert(rule("20230615", "RULE02", 300));

        assert_eq!(replaced.map(|r| r.rule_id().to_string()), Some("RULE01".to_string()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.rules()[0].rule_id(), "RULE02");
        assert_eq!(table.rules()[0].rate(), Decimal::new(300, 2));
    }

    #[test]
    fn test_rule_for_picks_latest_effective_rule() {
        let mut table = RuleTable::new();
        table.upsert(rule("20230101", "RULE01", 195));
        table.upsert(rule("20230520", "RULE02", 190));
        table.upsert(rule("20230615", "RULE03", 220));

        let lookup = |date: &str| {
            table
                .rule_for(parse_date(date).unwrap())
                .map(|r| r.rule_id().to_string())
        };

        assert_eq!(lookup("20221231"), None);
        assert_eq!(lookup("20230101").as_deref(), Some("RULE01"));
        assert_eq!(lookup("20230519").as_deref(), Some("RULE01"));
        assert_eq!(lookup("20230520").as_deref(), Some("RULE02"));
        assert_eq!(lookup("20230614").as_deref(), Some("RULE02"));
        assert_eq!(lookup("20230615").as_deref(), Some("RULE03"));
        assert_eq!(lookup("20991231").as_deref(), Some("RULE03"));
    }

    #[test]
    fn test_effective_dates_between() {
        let mut table = RuleTable::new();
        table.upsert(rule("20230520", "RULE02", 190));
        table.upsert(rule("20230601", "RULE03", 220));
        table.upsert(rule("20230615", "RULE04", 250));
        table.upsert(rule("20230701", "RULE05", 300));

        let dates: Vec<NaiveDate> = table
            .effective_dates_between(
                parse_date("20230601").unwrap(),
                parse_date("20230630").unwrap(),
            )
            .collect();

        assert_eq!(
            dates,
            vec![
                parse_date("20230601").unwrap(),
                parse_date("20230615").unwrap()
            ]
        );
    }
}
