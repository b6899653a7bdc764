//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `calendar`: `YYYYMMDD` dates and `YYYYMM` month selectors
//! - `money`: two-decimal, half-up monetary helpers
//! - `transaction`: Transaction-related types and identifiers
//! - `interest_rule`: Rate-effective-date rules
//! - `error`: Error types for the ledger

pub mod calendar;
pub mod error;
pub mod interest_rule;
pub mod money;
pub mod transaction;

pub use calendar::{format_date, parse_date, YearMonth};
pub use error::LedgerError;
pub use interest_rule::InterestRule;
pub use money::{format_money, parse_amount, parse_rate, round_money};
pub use transaction::{Transaction, TransactionId, TransactionType};
