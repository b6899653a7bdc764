//! Interest Ledger Library
//! # Overview
//!
//! This library provides an in-memory banking ledger: per-account transaction
//! histories, running balances, date-effective interest rules, and monthly
//! interest accrual, driven through a line-oriented interactive shell.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, InterestRule, YearMonth, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Transaction log, id allocation, point-in-time balances
//!   - [`core::rule_table`] - Date-sorted interest rules
//!   - [`core::interest`] - Sub-period interest accrual
//!   - [`core::ledger`] - Aggregate root over accounts and rules
//! - [`io`] - CSV preloading of rules and transactions
//! - [`shell`] - Interactive menu loop and table rendering
//!
//! # Interest Accrual
//!
//! A month is partitioned at every transaction date and rule-effective date
//! inside it. Over each sub-period the balance and the rate are constant, so
//! interest is `balance * rate% * days / 365`, rounded half-up per period and
//! again after summing. A positive total is credited on the month's last day.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use core::{Account, Ledger, MonthlyStatement, RuleTable};
pub use shell::Shell;
pub use types::{
    InterestRule, LedgerError, Transaction, TransactionId, TransactionType, YearMonth,
};
