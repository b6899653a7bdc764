//! Transaction-related types for the interest ledger
//!
//! This module defines transaction types, per-day sequence identifiers, and
//! the immutable transaction record stored in each account's log.

use super::calendar::format_date;
use super::error::LedgerError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Transaction types recorded by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires prior activity on the account and a balance at least as
    /// large as the amount.
    Withdrawal,

    /// Monthly interest credit
    ///
    /// Only ever created by interest accrual; never entered by a user.
    Interest,
}

impl TransactionType {
    /// Single-letter code used in tables and input (`D`, `W`, `I`)
    pub fn code(&self) -> char {
        match self {
            TransactionType::Deposit => 'D',
            TransactionType::Withdrawal => 'W',
            TransactionType::Interest => 'I',
        }
    }

    /// Whether this type increases the balance
    pub fn is_credit(&self) -> bool {
        !matches!(self, TransactionType::Withdrawal)
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    /// Parse a user-entered type code
    ///
    /// Accepts `D` and `W` in either case. Interest cannot be entered.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_ascii_uppercase().as_str() {
            "D" => Ok(TransactionType::Deposit),
            "W" => Ok(TransactionType::Withdrawal),
            _ => Err(LedgerError::invalid_type(text)),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Sequence identifier of a deposit or withdrawal
///
/// Rendered as `YYYYMMDD-NN`. The sequence restarts at 1 for every
/// (account, date) pair. Ordering is by date, then numeric sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransactionId {
    /// Date the sequence belongs to
    pub date: NaiveDate,
    /// 1-based position within that date
    pub seq: u32,
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", format_date(self.date), self.seq)
    }
}

/// One immutable ledger event
///
/// Created only by `Account`; the amount is always positive and already
/// rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    id: Option<TransactionId>,
    tx_type: TransactionType,
    amount: Decimal,
}

impl Transaction {
    pub(crate) fn new(
        date: NaiveDate,
        id: Option<TransactionId>,
        tx_type: TransactionType,
        amount: Decimal,
    ) -> Self {
        Transaction {
            date,
            id,
            tx_type,
            amount,
        }
    }

    /// Value date of the transaction
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Sequence identifier; `None` for interest credits
    pub fn id(&self) -> Option<TransactionId> {
        self.id
    }

    /// Identifier as shown to users; empty for interest credits
    pub fn id_label(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn tx_type(&self) -> TransactionType {
        self.tx_type
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Amount with the sign it contributes to the balance
    pub fn signed_amount(&self) -> Decimal {
        if self.tx_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }

    /// Replay ordering key
    ///
    /// Interest credits (no id) sort ahead of deposits and withdrawals on
    /// the same date.
    pub fn sort_key(&self) -> (NaiveDate, Option<TransactionId>) {
        (self.date, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case::deposit("D", TransactionType::Deposit)]
    #[case::withdrawal("W", TransactionType::Withdrawal)]
    #[case::lowercase_deposit("d", TransactionType::Deposit)]
    #[case::lowercase_withdrawal("w", TransactionType::Withdrawal)]
    fn test_transaction_type_parsing(#[case] input: &str, #[case] expected: TransactionType) {
        assert_eq!(input.parse::<TransactionType>().unwrap(), expected);
    }

    #[rstest]
    #[case::interest("I")]
    #[case::word("deposit")]
    #[case::unknown("X")]
    #[case::empty("")]
    fn test_transaction_type_rejects_other_codes(#[case] input: &str) {
        assert_eq!(
            input.parse::<TransactionType>(),
            Err(LedgerError::invalid_type(input))
        );
    }

    #[test]
    fn test_transaction_id_display_pads_sequence() {
        let id = TransactionId {
            date: date(2023, 6, 26),
            seq: 1,
        };
        assert_eq!(id.to_string(), "20230626-01");

        let id = TransactionId {
            date: date(2023, 6, 26),
            seq: 123,
        };
        assert_eq!(id.to_string(), "20230626-123");
    }

    #[test]
    fn test_transaction_id_orders_numerically() {
        let ninth = TransactionId {
            date: date(2023, 6, 1),
            seq: 9,
        };
        let hundredth = TransactionId {
            date: date(2023, 6, 1),
            seq: 100,
        };
        assert!(ninth < hundredth);
    }

    #[test]
    fn test_interest_sorts_before_same_day_activity() {
        let deposit = Transaction::new(
            date(2023, 6, 30),
            Some(TransactionId {
                date: date(2023, 6, 30),
                seq: 1,
            }),
            TransactionType::Deposit,
            Decimal::new(1000, 2),
        );
        let interest = Transaction::new(
            date(2023, 6, 30),
            None,
            TransactionType::Interest,
            Decimal::new(99, 2),
        );

        assert!(interest.sort_key() < deposit.sort_key());
        assert_eq!(interest.id_label(), "");
        assert_eq!(deposit.id_label(), "20230630-01");
    }

    #[test]
    fn test_signed_amount() {
        let withdrawal = Transaction::new(
            date(2023, 6, 1),
            Some(TransactionId {
                date: date(2023, 6, 1),
                seq: 1,
            }),
            TransactionType::Withdrawal,
            Decimal::new(5000, 2),
        );
        assert_eq!(withdrawal.signed_amount(), Decimal::new(-5000, 2));
        assert_eq!(withdrawal.tx_type().to_string(), "W");
    }
}
