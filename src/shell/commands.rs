//! Shell command parsing
//!
//! Turns menu selections and whitespace-separated input lines into typed
//! requests. Field validation is shared with the CSV preloader.

use crate::io::csv_format::{
    convert_rule_record, convert_transaction_record, RuleCsvRecord, RuleRequest,
    TransactionCsvRecord, TransactionRequest,
};
use crate::types::{LedgerError, YearMonth};
use std::str::FromStr;
use thiserror::Error;

/// Errors reported to the user by the shell
#[derive(Debug, Error)]
pub enum CommandError {
    /// Menu selection not recognised
    #[error("Invalid option.")]
    UnknownOption { option: String },

    /// Wrong number of fields on an input line
    #[error("Invalid input format.")]
    Format { expected: usize, found: usize },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main menu selections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Transactions,
    InterestRules,
    PrintStatement,
    Quit,
}

impl FromStr for MenuAction {
    type Err = CommandError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_uppercase().as_str() {
            "T" => Ok(MenuAction::Transactions),
            "I" => Ok(MenuAction::InterestRules),
            "P" => Ok(MenuAction::PrintStatement),
            "Q" => Ok(MenuAction::Quit),
            _ => Err(CommandError::UnknownOption {
                option: text.to_string(),
            }),
        }
    }
}

/// Statement request: `<Account> <YYYYMM>`
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRequest {
    pub account: String,
    pub period: YearMonth,
}

fn split_fields<const N: usize>(line: &str) -> Result<[String; N], CommandError> {
    let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let found = fields.len();
    fields
        .try_into()
        .map_err(|_| CommandError::Format { expected: N, found })
}

/// Parse `<Date> <Account> <Type> <Amount>`
pub fn parse_transaction_line(line: &str) -> Result<TransactionRequest, CommandError> {
    let [date, account, tx_type, amount] = split_fields::<4>(line)?;
    let request = convert_transaction_record(TransactionCsvRecord {
        date,
        account,
        tx_type,
        amount,
    })?;
    Ok(request)
}

/// Parse `<Date> <RuleId> <Rate in %>`
pub fn parse_rule_line(line: &str) -> Result<RuleRequest, CommandError> {
    let [date, rule_id, rate] = split_fields::<3>(line)?;
    let request = convert_rule_record(RuleCsvRecord {
        date,
        rule_id,
        rate,
    })?;
    Ok(request)
}

/// Parse `<Account> <YYYYMM>`
pub fn parse_statement_line(line: &str) -> Result<StatementRequest, CommandError> {
    let [account, period] = split_fields::<2>(line)?;
    let period = period.parse::<YearMonth>()?;
    Ok(StatementRequest { account, period })
}
