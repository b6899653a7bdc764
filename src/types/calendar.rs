//! Calendar types used at the ledger boundary
//!
//! Dates travel as `YYYYMMDD` text and month selectors as `YYYYMM` text.
//! Internally both are backed by `chrono::NaiveDate`.

use super::error::LedgerError;
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Parse an 8-digit `YYYYMMDD` date
///
/// The text must be exactly eight ASCII digits and name a real calendar day.
///
/// # Errors
///
/// Returns `LedgerError::InvalidDate` otherwise.
pub fn parse_date(text: &str) -> Result<NaiveDate, LedgerError> {
    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::invalid_date(text));
    }

    let year: i32 = text[0..4]
        .parse()
        .map_err(|_| LedgerError::invalid_date(text))?;
    let month: u32 = text[4..6]
        .parse()
        .map_err(|_| LedgerError::invalid_date(text))?;
    let day: u32 = text[6..8]
        .parse()
        .map_err(|_| LedgerError::invalid_date(text))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| LedgerError::invalid_date(text))
}

/// Render a date as `YYYYMMDD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// A calendar month selected for statements and interest accrual
///
/// Holds the first and last calendar day so callers never need to redo the
/// month-length arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl YearMonth {
    /// Build a month from its numeric parts
    ///
    /// Returns `None` when `month` is outside 1..=12 or the year is out of
    /// chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let last_day = next_month.pred_opt()?;

        Some(YearMonth {
            first_day,
            last_day,
        })
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }
}

impl FromStr for YearMonth {
    type Err = LedgerError;

    /// Parse a 6-digit `YYYYMM` month selector
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.len() != 6 || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LedgerError::invalid_period(text));
        }

        let year: i32 = text[0..4]
            .parse()
            .map_err(|_| LedgerError::invalid_period(text))?;
        let month: u32 = text[4..6]
            .parse()
            .map_err(|_| LedgerError::invalid_period(text))?;

        YearMonth::new(year, month).ok_or_else(|| LedgerError::invalid_period(text))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%Y%m"))
    }
}
