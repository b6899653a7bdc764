//! Monthly interest accrual
//!
//! A month is split into maximal sub-periods over which both the balance and
//! the applicable rate are constant. Boundaries are the month's first day,
//! every transaction date inside the month, and every rule-effective date
//! inside the month. Period `i` runs from `boundary[i]` to
//! `boundary[i+1] - 1 day`; the last period runs to the month's last day.
//!
//! For each sub-period:
//!
//! ```text
//! interest = balance_at_start * (rate / 100) * days / 365
//! ```
//!
//! rounded half-up to two decimals. The divisor is 365 in leap years too.
//! Periods that start before any rule is effective accrue nothing.

use crate::core::rule_table::RuleTable;
use crate::core::traits::BalanceTimeline;
use crate::types::{round_money, YearMonth};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Annualisation divisor
pub const DAYS_PER_YEAR: i64 = 365;

/// Inclusive date range with constant balance and rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SubPeriod {
    /// Number of days, counting both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Interest earned over one sub-period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodAccrual {
    pub period: SubPeriod,
    /// Balance at the end of the period's first day
    pub balance: Decimal,
    /// Rule applied, as `(rule_id, rate)`
    pub rule_id: String,
    pub rate: Decimal,
    /// Rounded interest for the period
    pub interest: Decimal,
}

/// Result of accruing a whole month
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlyAccrual {
    /// Sub-periods that had an applicable rule, in date order
    pub periods: Vec<PeriodAccrual>,
    /// Sum of period interest, rounded half-up
    pub total: Decimal,
}

/// Partition `month` into sub-periods
///
/// `boundaries` may contain any dates; those outside the month are ignored
/// because earlier activity already shows up in the opening balance.
pub fn sub_periods<I>(month: YearMonth, boundaries: I) -> Vec<SubPeriod>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut starts: BTreeSet<NaiveDate> = boundaries
        .into_iter()
        .filter(|date| month.contains(*date))
        .collect();
    starts.insert(month.first_day());

    let starts: Vec<NaiveDate> = starts.into_iter().collect();
    starts
        .iter()
        .enumerate()
        .filter_map(|(index, &start)| {
            let end = match starts.get(index + 1) {
                Some(next) => next.pred_opt()?,
                None => month.last_day(),
            };
            Some(SubPeriod { start, end })
        })
        .collect()
}

/// Interest for `days` days at `rate` percent on `balance`, rounded half-up
///
/// Returns `None` if an intermediate product overflows.
pub fn period_interest(balance: Decimal, rate: Decimal, days: i64) -> Option<Decimal> {
    let yearly = balance.checked_mul(rate)?.checked_div(Decimal::ONE_HUNDRED)?;
    let interest = yearly
        .checked_mul(Decimal::from(days))?
        .checked_div(Decimal::from(DAYS_PER_YEAR))?;
    Some(round_money(interest))
}

/// Accrue interest for one month
///
/// Returns `None` on arithmetic overflow.
pub fn accrue_month<T>(timeline: &T, rules: &RuleTable, month: YearMonth) -> Option<MonthlyAccrual>
where
    T: BalanceTimeline + ?Sized,
{
    if rules.is_empty() {
        return Some(MonthlyAccrual::default());
    }

    let boundaries = timeline
        .activity_dates()
        .into_iter()
        .chain(rules.effective_dates_between(month.first_day(), month.last_day()));

    let mut accrual = MonthlyAccrual::default();

    for period in sub_periods(month, boundaries) {
        let days = period.days();
        if days <= 0 {
            continue;
        }

        let Some(rule) = rules.rule_for(period.start) else {
            continue;
        };

        let balance = timeline.balance_on(period.start)?;
        let interest = period_interest(balance, rule.rate(), days)?;

        accrual.total = accrual.total.checked_add(interest)?;
        accrual.periods.push(PeriodAccrual {
            period,
            balance,
            rule_id: rule.rule_id().to_string(),
            rate: rule.rate(),
            interest,
        });
    }

    accrual.total = round_money(accrual.total);
    Some(accrual)
}
