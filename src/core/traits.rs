//! Core traits for balance history queries
//!
//! Interest accrual only needs point-in-time balances and the dates on which
//! the balance can change. This trait is the seam between the accrual
//! algorithm and whatever holds the transaction log.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Point-in-time view of an account's balance
pub trait BalanceTimeline {
    /// Balance at the end of `date`, counting every transaction dated on or before it
    ///
    /// `None` if summing the history overflows.
    fn balance_on(&self, date: NaiveDate) -> Option<Decimal>;

    /// Sorted, deduplicated dates on which the balance may change
    fn activity_dates(&self) -> Vec<NaiveDate>;
}
