//! Error types for the interest ledger
//!
//! This module defines every error a ledger operation can report. Each
//! variant's display string is the one-line message the interactive shell
//! prints before continuing its loop.
//!
//! # Error Categories
//!
//! - **Input Errors**: malformed dates, periods, amounts, rates, or transaction types
//! - **Account Errors**: unknown accounts, empty accounts, insufficient funds
//! - **Arithmetic Errors**: overflow in balance or interest calculations
//! - **File Errors**: missing or unreadable CSV preload files, malformed CSV rows

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Validation always happens before state mutation, so any operation that
/// returns one of these errors has left the ledger unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred while preloading data
    ///
    /// Recoverable: the malformed row is skipped.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Amount is unparsable, zero, or negative
    #[error("Amount must be positive: {amount}")]
    InvalidAmount {
        /// The rejected amount as entered
        amount: String,
    },

    /// Date is not 8 digits or not a real calendar date
    #[error("Invalid date '{date}': expected YYYYMMDD")]
    InvalidDate {
        /// The rejected date text
        date: String,
    },

    /// Month selector is not 6 digits or names no real month
    #[error("Invalid period '{period}': expected YYYYMM")]
    InvalidPeriod {
        /// The rejected period text
        period: String,
    },

    /// Transaction type is not D or W
    #[error("Invalid transaction type '{tx_type}': expected D or W")]
    InvalidType {
        /// The rejected type text
        tx_type: String,
    },

    /// First transaction on an account is a withdrawal
    #[error("First transaction cannot be withdrawal (account {account})")]
    EmptyAccount {
        /// Account identifier
        account: String,
    },

    /// Withdrawal would take the balance below zero
    #[error("Insufficient funds for account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account identifier
        account: String,
        /// Balance before the withdrawal
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// Interest rate outside the open interval (0, 100)
    #[error("Rate must be between 0 and 100 (exclusive), got {rate}")]
    InvalidRate {
        /// The rejected rate as entered
        rate: String,
    },

    /// No account exists with the given identifier
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account identifier
        account: String,
    },

    /// Interest amount is negative
    #[error("Interest amount cannot be negative: {amount} for account {account}")]
    NegativeInterest {
        /// Account identifier
        account: String,
        /// The rejected interest amount
        amount: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account identifier
        account: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: impl ToString) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidDate error
    pub fn invalid_date(date: &str) -> Self {
        LedgerError::InvalidDate {
            date: date.to_string(),
        }
    }

    /// Create an InvalidPeriod error
    pub fn invalid_period(period: &str) -> Self {
        LedgerError::InvalidPeriod {
            period: period.to_string(),
        }
    }

    /// Create an InvalidType error
    pub fn invalid_type(tx_type: &str) -> Self {
        LedgerError::InvalidType {
            tx_type: tx_type.to_string(),
        }
    }

    /// Create an EmptyAccount error
    pub fn empty_account(account: &str) -> Self {
        LedgerError::EmptyAccount {
            account: account.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account: account.to_string(),
            balance,
            requested,
        }
    }

    /// Create an InvalidRate error
    pub fn invalid_rate(rate: impl ToString) -> Self {
        LedgerError::InvalidRate {
            rate: rate.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: &str) -> Self {
        LedgerError::AccountNotFound {
            account: account.to_string(),
        }
    }

    /// Create a NegativeInterest error
    pub fn negative_interest(account: &str, amount: Decimal) -> Self {
        LedgerError::NegativeInterest {
            account: account.to_string(),
            amount,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account: account.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "rules.csv".to_string() },
        "File not found: rules.csv"
    )]
    #[case::parse_error_with_line(
        LedgerError::ParseError { line: Some(3), message: "Invalid field".to_string() },
        "CSV parse error at line 3: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_amount(
        LedgerError::invalid_amount("-10.00"),
        "Amount must be positive: -10.00"
    )]
    #[case::invalid_date(
        LedgerError::invalid_date("2023-06-01"),
        "Invalid date '2023-06-01': expected YYYYMMDD"
    )]
    #[case::invalid_period(
        LedgerError::invalid_period("2023"),
        "Invalid period '2023': expected YYYYMM"
    )]
    #[case::invalid_type(
        LedgerError::invalid_type("X"),
        "Invalid transaction type 'X': expected D or W"
    )]
    #[case::empty_account(
        LedgerError::empty_account("AC001"),
        "First transaction cannot be withdrawal (account AC001)"
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds("AC001", Decimal::new(5000, 2), Decimal::new(15000, 2)),
        "Insufficient funds for account AC001: balance 50.00, requested 150.00"
    )]
    #[case::invalid_rate(
        LedgerError::invalid_rate("0"),
        "Rate must be between 0 and 100 (exclusive), got 0"
    )]
    #[case::account_not_found(
        LedgerError::account_not_found("AC404"),
        "Account AC404 not found"
    )]
    #[case::negative_interest(
        LedgerError::negative_interest("AC001", Decimal::new(-1, 2)),
        "Interest amount cannot be negative: -0.01 for account AC001"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
