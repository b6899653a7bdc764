//! Interest Ledger CLI
//!
//! Interactive bank ledger: record transactions, define interest rules, and
//! print monthly statements with interest.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --rules rules.csv --transactions transactions.csv
//! cargo run -- --script session.txt --log-level debug
//! ```
//!
//! Shell output goes to stdout; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (preload file missing or unreadable, I/O failure)

use interest_ledger::cli;
use interest_ledger::io::{load_rules, load_transactions};
use interest_ledger::{Ledger, Shell};
use log::error;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    let args = cli::parse_args();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    let mut ledger = Ledger::new();

    // Rules first, so preloaded transactions can be accrued right away
    if let Some(path) = &args.rules {
        if let Err(e) = load_rules(&mut ledger, path) {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
    if let Some(path) = &args.transactions {
        if let Err(e) = load_transactions(&mut ledger, path) {
            error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    let stdout = io::stdout().lock();
    let result = match &args.script {
        Some(path) => match File::open(path) {
            Ok(file) => Shell::new(ledger, BufReader::new(file), stdout).run(),
            Err(e) => {
                eprintln!("Error: failed to open script '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Shell::new(ledger, io::stdin().lock(), stdout).run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
