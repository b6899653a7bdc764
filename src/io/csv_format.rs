//! CSV format handling for preload files
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization of transaction and rule rows
//! - Conversion from raw CSV records to typed ledger requests
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{parse_amount, parse_date, parse_rate, LedgerError, TransactionType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Transaction row: `date,account,type,amount`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionCsvRecord {
    pub date: String,
    pub account: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub amount: String,
}

/// Interest rule row: `date,rule_id,rate`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RuleCsvRecord {
    pub date: String,
    pub rule_id: String,
    pub rate: String,
}

/// Typed deposit/withdrawal request
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRequest {
    pub date: NaiveDate,
    pub account: String,
    pub tx_type: TransactionType,
    pub amount: Decimal,
}

/// Typed interest rule request
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRequest {
    pub date: NaiveDate,
    pub rule_id: String,
    pub rate: Decimal,
}

/// Convert a transaction row into a typed request
///
/// Checks field syntax only; balance rules are applied by the ledger.
///
/// # Errors
///
/// `InvalidDate`, `InvalidType`, or `InvalidAmount` for malformed fields.
pub fn convert_transaction_record(
    record: TransactionCsvRecord,
) -> Result<TransactionRequest, LedgerError> {
    let date = parse_date(&record.date)?;
    let tx_type = record.tx_type.parse::<TransactionType>()?;
    let amount = parse_amount(&record.amount)?;

    if record.account.is_empty() {
        return Err(LedgerError::ParseError {
            line: None,
            message: "account must not be empty".to_string(),
        });
    }

    Ok(TransactionRequest {
        date,
        account: record.account,
        tx_type,
        amount,
    })
}

/// Convert a rule row into a typed request
///
/// # Errors
///
/// `InvalidDate` or `InvalidRate` for malformed fields.
pub fn convert_rule_record(record: RuleCsvRecord) -> Result<RuleRequest, LedgerError> {
    let date = parse_date(&record.date)?;
    let rate = parse_rate(&record.rate)?;

    Ok(RuleRequest {
        date,
        rule_id: record.rule_id,
        rate,
    })
}
