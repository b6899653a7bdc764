//! Ledger preloading from CSV files
//!
//! Rows that fail to parse or are rejected by the ledger are logged and
//! skipped; only failing to open a file aborts the load.

use crate::core::Ledger;
use crate::io::csv_format::{
    convert_rule_record, convert_transaction_record, RuleCsvRecord, TransactionCsvRecord,
};
use crate::io::sync_reader::SyncReader;
use crate::types::LedgerError;
use log::{info, warn};
use std::io::Read;
use std::path::Path;

/// Counts of rows applied and skipped during a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreloadSummary {
    pub applied: usize,
    pub skipped: usize,
}

/// Load interest rules from a CSV file
///
/// # Errors
///
/// Returns an error only if the file cannot be opened.
pub fn load_rules(ledger: &mut Ledger, path: &Path) -> Result<PreloadSummary, LedgerError> {
    let summary = apply_rules(ledger, SyncReader::open(path)?);
    info!(
        "loaded {} interest rules from {} ({} skipped)",
        summary.applied,
        path.display(),
        summary.skipped
    );
    Ok(summary)
}

/// Load deposits and withdrawals from a CSV file
///
/// Rows are applied in file order, so a withdrawal must follow the deposits
/// that fund it.
///
/// # Errors
///
/// Returns an error only if the file cannot be opened.
pub fn load_transactions(ledger: &mut Ledger, path: &Path) -> Result<PreloadSummary, LedgerError> {
    let summary = apply_transactions(ledger, SyncReader::open(path)?);
    info!(
        "loaded {} transactions from {} ({} skipped, {} accounts)",
        summary.applied,
        path.display(),
        summary.skipped,
        ledger.account_count()
    );
    Ok(summary)
}

/// Apply rule rows from any reader
pub fn apply_rules<R: Read>(
    ledger: &mut Ledger,
    rows: SyncReader<RuleCsvRecord, R>,
) -> PreloadSummary {
    let mut summary = PreloadSummary::default();

    for row in rows {
        let outcome = row.and_then(convert_rule_record).and_then(|rule| {
            ledger.add_interest_rule(rule.date, &rule.rule_id, rule.rate)
        });

        match outcome {
            Ok(_) => summary.applied += 1,
            Err(e) => {
                warn!("skipping interest rule row: {}", e);
                summary.skipped += 1;
            }
        }
    }

    summary
}

/// Apply transaction rows from any reader
pub fn apply_transactions<R: Read>(
    ledger: &mut Ledger,
    rows: SyncReader<TransactionCsvRecord, R>,
) -> PreloadSummary {
    let mut summary = PreloadSummary::default();

    for row in rows {
        let outcome = row.and_then(convert_transaction_record).and_then(|request| {
            ledger.add_transaction(request.date, &request.account, request.tx_type, request.amount)
        });

        match outcome {
            Ok(_) => summary.applied += 1,
            Err(e) => {
                warn!("skipping transaction row: {}", e);
                summary.skipped += 1;
            }
        }
    }

    summary
}
