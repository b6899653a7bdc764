//! I/O module
//!
//! Handles CSV preloading of interest rules and transactions.
//!
//! # Components
//!
//! - `csv_format` - CSV record structures and conversion to typed requests
//! - `sync_reader` - Synchronous CSV reader with iterator interface
//! - `preload` - Applying preload files to a ledger

pub mod csv_format;
pub mod preload;
pub mod sync_reader;

pub use csv_format::{convert_rule_record, convert_transaction_record};
pub use preload::{load_rules, load_transactions, PreloadSummary};
pub use sync_reader::SyncReader;
