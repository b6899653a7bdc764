//! Account module
//!
//! This module provides the `Account` struct which owns one account's
//! append-only transaction log and its running balance.
//!
//! The Account is responsible for:
//! - Validating deposits and withdrawals before they are recorded
//! - Allocating `YYYYMMDD-NN` identifiers from a per-date counter
//! - Recording interest credits
//! - Answering statement and point-in-time balance queries

use crate::core::traits::BalanceTimeline;
use crate::types::{
    round_money, LedgerError, Transaction, TransactionId, TransactionType, YearMonth,
};
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};

/// One account's transaction log and balance
///
/// Transactions are kept in insertion order. Because back-dated entries are
/// allowed, queries that care about chronology sort by `(date, id)`.
#[derive(Debug, Clone)]
pub struct Account {
    account_id: String,
    transactions: Vec<Transaction>,
    /// Running balance, always rounded to two decimals
    balance: Decimal,
    /// Last sequence number handed out per date
    txn_counter: HashMap<NaiveDate, u32>,
}

impl Account {
    /// Create an account with no transactions and a zero balance
    pub fn new(account_id: impl Into<String>) -> Self {
        Account {
            account_id: account_id.into(),
            transactions: Vec::new(),
            balance: Decimal::ZERO,
            txn_counter: HashMap::new(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Current running balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All transactions sorted by `(date, id)`
    pub fn sorted_transactions(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        sorted.sort_by_key(|tx| tx.sort_key());
        sorted
    }

    /// Record a deposit or withdrawal
    ///
    /// The amount is rounded half-up to two decimals before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tx_type` is `Interest` (`InvalidType`)
    /// - the rounded amount is not positive (`InvalidAmount`)
    /// - a withdrawal is the account's first transaction (`EmptyAccount`)
    /// - a withdrawal exceeds the balance (`InsufficientFunds`)
    /// - the new balance would overflow (`ArithmeticOverflow`)
    ///
    /// On error the account is unchanged.
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        tx_type: TransactionType,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        if tx_type == TransactionType::Interest {
            return Err(LedgerError::invalid_type(&tx_type.to_string()));
        }

        let amount = round_money(amount);
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(amount));
        }

        let new_balance = match tx_type {
            TransactionType::Withdrawal => {
                if self.transactions.is_empty() {
                    return Err(LedgerError::empty_account(&self.account_id));
                }
                if self.balance < amount {
                    return Err(LedgerError::insufficient_funds(
                        &self.account_id,
                        self.balance,
                        amount,
                    ));
                }
                self.balance
                    .checked_sub(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", &self.account_id))?
            }
            _ => self
                .balance
                .checked_add(amount)
                .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", &self.account_id))?,
        };

        let id = self.next_txn_id(date);
        let transaction = Transaction::new(date, Some(id), tx_type, amount);
        self.transactions.push(transaction.clone());
        self.balance = round_money(new_balance);

        debug!(
            "account {}: recorded {} {} {} (balance {})",
            self.account_id, id, tx_type, amount, self.balance
        );

        Ok(transaction)
    }

    /// Record an interest credit
    ///
    /// Interest carries no sequence id and is always additive.
    ///
    /// # Errors
    ///
    /// Returns `NegativeInterest` if the rounded amount is below zero, or
    /// `ArithmeticOverflow` if the balance would overflow.
    pub fn add_interest(
        &mut self,
        date: NaiveDate,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        let amount = round_money(amount);
        if amount < Decimal::ZERO {
            return Err(LedgerError::negative_interest(&self.account_id, amount));
        }

        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("interest", &self.account_id))?;

        let transaction = Transaction::new(date, None, TransactionType::Interest, amount);
        self.transactions.push(transaction.clone());
        self.balance = round_money(new_balance);

        debug!(
            "account {}: credited interest {} on {} (balance {})",
            self.account_id, amount, date, self.balance
        );

        Ok(transaction)
    }

    /// Transactions dated inside `year_month`, in stored order
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `year_month` is not a `YYYYMM` month.
    pub fn get_statement(&self, year_month: &str) -> Result<Vec<&Transaction>, LedgerError> {
        let period: YearMonth = year_month.parse()?;
        Ok(self.statement(period))
    }

    /// Transactions dated inside `period`, in stored order
    pub fn statement(&self, period: YearMonth) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| period.contains(tx.date()))
            .collect()
    }

    /// Balance at the end of `date`
    ///
    /// Replays every transaction dated on or before `date` in `(date, id)`
    /// order instead of trusting the running balance, so back-dated entries
    /// are accounted for regardless of insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if a back-dated entry pushes an
    /// intermediate sum of the replay out of range.
    pub fn get_balance_on_date(&self, date: NaiveDate) -> Result<Decimal, LedgerError> {
        let balance = self
            .sorted_transactions()
            .into_iter()
            .take_while(|tx| tx.date() <= date)
            .try_fold(Decimal::ZERO, |acc, tx| acc.checked_add(tx.signed_amount()))
            .ok_or_else(|| LedgerError::arithmetic_overflow("balance replay", &self.account_id))?;
        Ok(round_money(balance))
    }

    /// Sorted unique transaction dates
    pub fn get_all_transaction_dates(&self) -> Vec<NaiveDate> {
        self.transactions
            .iter()
            .map(|tx| tx.date())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether an interest credit is already dated on `date`
    pub fn has_interest_on(&self, date: NaiveDate) -> bool {
        self.transactions
            .iter()
            .any(|tx| tx.tx_type() == TransactionType::Interest && tx.date() == date)
    }

    fn next_txn_id(&mut self, date: NaiveDate) -> TransactionId {
        let seq = self.txn_counter.entry(date).or_insert(0);
        *seq += 1;
        TransactionId { date, seq: *seq }
    }
}

impl BalanceTimeline for Account {
    fn balance_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.get_balance_on_date(date).ok()
    }

    fn activity_dates(&self) -> Vec<NaiveDate> {
        self.get_all_transaction_dates()
    }
}
