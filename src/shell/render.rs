//! Table rendering for shell output

use crate::core::MonthlyStatement;
use crate::types::{format_date, format_money, InterestRule, Transaction};
use std::io::{self, Write};

/// Write an account's transactions as a table
pub fn write_account_transactions(
    out: &mut dyn Write,
    account_id: &str,
    transactions: &[&Transaction],
) -> io::Result<()> {
    writeln!(out, "Account: {}", account_id)?;
    writeln!(out, "| Date     | Txn Id      | Type | Amount |")?;
    for tx in transactions {
        writeln!(
            out,
            "| {} | {:<11} | {:<4} | {:>6} |",
            format_date(tx.date()),
            tx.id_label(),
            tx.tx_type().code(),
            format_money(tx.amount())
        )?;
    }
    Ok(())
}

/// Write the interest rule table
pub fn write_interest_rules(out: &mut dyn Write, rules: &[InterestRule]) -> io::Result<()> {
    writeln!(out, "Interest rules:")?;
    writeln!(out, "| Date     | RuleId | Rate (%) |")?;
    for rule in rules {
        writeln!(
            out,
            "| {} | {:<6} | {:>8} |",
            format_date(rule.date()),
            rule.rule_id(),
            format_money(rule.rate())
        )?;
    }
    Ok(())
}

/// Write a monthly statement with running balances
pub fn write_statement(out: &mut dyn Write, statement: &MonthlyStatement) -> io::Result<()> {
    writeln!(out, "Account: {}", statement.account_id)?;
    writeln!(out, "| Date     | Txn Id      | Type | Amount | Balance |")?;
    for line in &statement.lines {
        let tx = &line.transaction;
        writeln!(
            out,
            "| {} | {:<11} | {:<4} | {:>6} | {:>7} |",
            format_date(tx.date()),
            tx.id_label(),
            tx.tx_type().code(),
            format_money(tx.amount()),
            format_money(line.balance)
        )?;
    }
    Ok(())
}
