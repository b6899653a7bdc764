//! Synchronous CSV reader with iterator interface
//!
//! Streams typed records out of a preload CSV file one row at a time.
//!
//! ```no_run
//! use interest_ledger::io::csv_format::RuleCsvRecord;
//! use interest_ledger::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::<RuleCsvRecord>::open(Path::new("rules.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("rule: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual row errors are yielded as `Err` items carrying the line number

use crate::types::LedgerError;
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::marker::PhantomData;
use std::path::Path;

/// Synchronous CSV reader yielding deserialized rows of type `T`
#[derive(Debug)]
pub struct SyncReader<T, R = File> {
    reader: csv::Reader<R>,
    line_num: u64,
    _record: PhantomData<T>,
}

impl<T> SyncReader<T, File> {
    /// Open a CSV file for streaming
    ///
    /// # Errors
    ///
    /// `FileNotFound` if the path does not exist, `IoError` for any other
    /// failure to open it.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LedgerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => LedgerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<T, R: Read> SyncReader<T, R> {
    /// Wrap any reader
    ///
    /// Whitespace around fields is trimmed and the header row is required.
    pub fn from_reader(input: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(input);

        SyncReader {
            reader,
            line_num: 1,
            _record: PhantomData,
        }
    }
}

impl<T: DeserializeOwned, R: Read> Iterator for SyncReader<T, R> {
    type Item = Result<T, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::StringRecord::new();
        self.line_num += 1;

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let headers = match self.reader.headers() {
                    Ok(headers) => headers.clone(),
                    Err(e) => return Some(Err(e.into())),
                };
                Some(record.deserialize(Some(&headers)).map_err(|e| {
                    LedgerError::ParseError {
                        line: Some(self.line_num),
                        message: e.to_string(),
                    }
                }))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
