//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Balance-history abstraction consumed by interest accrual
//! - `account` - Per-account transaction log and balance queries
//! - `rule_table` - Date-sorted interest rule table
//! - `interest` - Monthly sub-period interest accrual
//! - `ledger` - Aggregate root tying accounts and rules together

pub mod account;
pub mod interest;
pub mod ledger;
pub mod rule_table;
pub mod traits;

pub use account::Account;
pub use interest::{accrue_month, sub_periods, MonthlyAccrual, PeriodAccrual, SubPeriod};
pub use ledger::{Ledger, MonthlyStatement, StatementLine};
pub use rule_table::RuleTable;
pub use traits::BalanceTimeline;
