//! Ledger orchestration
//!
//! This module provides the `Ledger`, the aggregate root that owns every
//! account and the shared interest rule table. It is the only surface the
//! interactive shell and the CSV preloader talk to.
//!
//! The ledger enforces:
//! - Lazy account creation on the first *successful* transaction
//! - One interest rule per effective date, table kept date-sorted
//! - Interest credited once per call on the month's last calendar day

use crate::core::account::Account;
use crate::core::interest::{accrue_month, MonthlyAccrual};
use crate::core::rule_table::RuleTable;
use crate::types::{
    round_money, InterestRule, LedgerError, Transaction, TransactionType, YearMonth,
};
use chrono::NaiveDate;
use log::{debug, info};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// One row of a monthly statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub transaction: Transaction,
    /// Running balance after this transaction
    pub balance: Decimal,
}

/// A month of account activity with running balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStatement {
    pub account_id: String,
    pub period: YearMonth,
    /// Balance at the end of the day before the month starts
    pub opening_balance: Decimal,
    /// Transactions in `(date, id)` order
    pub lines: Vec<StatementLine>,
    /// Interest credited while producing this statement
    pub interest_posted: Decimal,
}

impl MonthlyStatement {
    /// Balance after the last line, or the opening balance if the month was quiet
    pub fn closing_balance(&self) -> Decimal {
        self.lines
            .last()
            .map(|line| line.balance)
            .unwrap_or(self.opening_balance)
    }
}

/// In-memory bank ledger
///
/// Owns all accounts and the interest rule table. Not designed for
/// concurrent access; wrap it in a lock if one is ever needed.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
    rules: RuleTable,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger {
            accounts: HashMap::new(),
            rules: RuleTable::new(),
        }
    }

    /// Record a deposit or withdrawal, creating the account if needed
    ///
    /// # Errors
    ///
    /// Propagates `Account::add_transaction` errors. A rejected transaction
    /// on an unknown account does not create the account.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        account_id: &str,
        tx_type: TransactionType,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        if let Some(account) = self.accounts.get_mut(account_id) {
            return account.add_transaction(date, tx_type, amount);
        }

        let mut account = Account::new(account_id);
        let transaction = account.add_transaction(date, tx_type, amount)?;
        self.accounts.insert(account_id.to_string(), account);
        debug!("opened account {}", account_id);

        Ok(transaction)
    }

    /// Define or replace the interest rule effective on `date`
    ///
    /// # Returns
    ///
    /// `true` if an existing rule on the same date was replaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidRate` unless `0 < rate < 100`.
    pub fn add_interest_rule(
        &mut self,
        date: NaiveDate,
        rule_id: &str,
        rate: Decimal,
    ) -> Result<bool, LedgerError> {
        let rule = InterestRule::new(date, rule_id, rate)?;
        let replaced = self.rules.upsert(rule);

        if let Some(previous) = &replaced {
            debug!(
                "rule {} on {} replaced by {} at {}%",
                previous.rule_id(),
                date,
                rule_id,
                rate
            );
        } else {
            debug!(
                "rule {} effective {} at {}% ({} rules)",
                rule_id,
                date,
                rate,
                self.rules.len()
            );
        }

        Ok(replaced.is_some())
    }

    /// All interest rules, ascending by effective date
    pub fn list_interest_rules(&self) -> &[InterestRule] {
        self.rules.rules()
    }

    /// The latest rule effective on or before `date`
    pub fn get_interest_rule_for_date(&self, date: NaiveDate) -> Option<&InterestRule> {
        self.rules.rule_for(date)
    }

    pub fn account(&self, account_id: &str) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// Number of accounts opened so far
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Every transaction on the account, sorted by `(date, id)`
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts.
    pub fn account_transactions(&self, account_id: &str) -> Result<Vec<&Transaction>, LedgerError> {
        Ok(self.find_account(account_id)?.sorted_transactions())
    }

    /// Work out the month's interest without posting it
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts, `ArithmeticOverflow`
    /// if the accrual overflows.
    pub fn preview_monthly_interest(
        &self,
        account_id: &str,
        period: YearMonth,
    ) -> Result<MonthlyAccrual, LedgerError> {
        let account = self.find_account(account_id)?;
        accrue_month(account, &self.rules, period)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest accrual", account_id))
    }

    /// Accrue and credit interest for one month
    ///
    /// When the accrued total is positive, one interest transaction dated
    /// on the month's last calendar day is posted to the account.
    ///
    /// # Returns
    ///
    /// The posted interest transactions (zero or one) and the total
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts.
    pub fn calculate_monthly_interest(
        &mut self,
        account_id: &str,
        period: YearMonth,
    ) -> Result<(Vec<Transaction>, Decimal), LedgerError> {
        let accrual = self.preview_monthly_interest(account_id, period)?;
        let total = round_money(accrual.total);

        if total <= Decimal::ZERO {
            debug!("account {}: no interest for {}", account_id, period);
            return Ok((Vec::new(), Decimal::ZERO));
        }

        let account = self.find_account_mut(account_id)?;
        let transaction = account.add_interest(period.last_day(), total)?;
        info!(
            "account {}: credited {} interest for {} over {} sub-periods",
            account_id,
            total,
            period,
            accrual.periods.len()
        );

        Ok((vec![transaction], total))
    }

    /// Transactions dated in `year_month`, in stored order
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts and `InvalidPeriod`
    /// when `year_month` is not `YYYYMM`.
    pub fn get_account_statement(
        &self,
        account_id: &str,
        year_month: &str,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        self.find_account(account_id)?.get_statement(year_month)
    }

    /// Build a printable monthly statement
    ///
    /// Posts the month's interest first unless an interest credit is already
    /// dated on the month's last day, so printing the same month twice does
    /// not credit interest twice.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` for unknown accounts, `ArithmeticOverflow`
    /// if replaying the account's history overflows.
    pub fn monthly_statement(
        &mut self,
        account_id: &str,
        period: YearMonth,
    ) -> Result<MonthlyStatement, LedgerError> {
        let already_posted = self
            .find_account(account_id)?
            .has_interest_on(period.last_day());

        let interest_posted = if already_posted {
            Decimal::ZERO
        } else {
            self.calculate_monthly_interest(account_id, period)?.1
        };

        let account = self.find_account(account_id)?;
        let opening_balance = match period.first_day().pred_opt() {
            Some(day) => account.get_balance_on_date(day)?,
            None => Decimal::ZERO,
        };

        let mut transactions = account.statement(period);
        transactions.sort_by_key(|tx| tx.sort_key());

        let mut balance = opening_balance;
        let mut lines = Vec::with_capacity(transactions.len());
        for tx in transactions {
            balance = balance
                .checked_add(tx.signed_amount())
                .map(round_money)
                .ok_or_else(|| LedgerError::arithmetic_overflow("statement balance", account_id))?;
            lines.push(StatementLine {
                transaction: tx.clone(),
                balance,
            });
        }

        Ok(MonthlyStatement {
            account_id: account_id.to_string(),
            period,
            opening_balance,
            lines,
            interest_posted,
        })
    }

    fn find_account(&self, account_id: &str) -> Result<&Account, LedgerError> {
        self.accounts
            .get(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    fn find_account_mut(&mut self, account_id: &str) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }
}
