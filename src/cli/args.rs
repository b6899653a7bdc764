use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Interactive bank ledger with monthly interest statements
#[derive(Parser, Debug)]
#[command(name = "interest-ledger")]
#[command(about = "Interactive bank ledger with monthly interest statements", long_about = None)]
pub struct CliArgs {
    /// CSV file of transactions to load before the session starts
    #[arg(
        long = "transactions",
        value_name = "CSV",
        help = "Preload transactions from a CSV file with header date,account,type,amount"
    )]
    pub transactions: Option<PathBuf>,

    /// CSV file of interest rules to load before the session starts
    #[arg(
        long = "rules",
        value_name = "CSV",
        help = "Preload interest rules from a CSV file with header date,rule_id,rate"
    )]
    pub rules: Option<PathBuf>,

    /// Read shell commands from a file instead of stdin
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Diagnostic log level (written to stderr)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: off, error, warn, info, debug or trace (RUST_LOG overrides)"
    )]
    pub log_level: LogLevel,
}

/// Log verbosity accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
