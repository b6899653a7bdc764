//! Interactive shell
//!
//! A line-oriented menu loop over a `Ledger`. Input and output are generic so
//! the same loop drives stdin/stdout, a script file, or an in-memory buffer.
//!
//! Every rejected line prints a one-line message and the loop carries on;
//! only I/O failures end the session early.

pub mod commands;
pub mod render;

use crate::core::Ledger;
use commands::{
    parse_rule_line, parse_statement_line, parse_transaction_line, CommandError, MenuAction,
};
use log::warn;
use std::io::{self, BufRead, Write};

const WELCOME: &str = "Welcome to AwesomeGIC Bank! What would you like to do?";
const MENU: [&str; 4] = [
    "[T] Input transactions",
    "[I] Define interest rules",
    "[P] Print statement",
    "[Q] Quit",
];
const BACK_HINT: &str = "(or enter blank to go back to main menu):";
const FAREWELL: [&str; 2] = ["Thank you for banking with AwesomeGIC Bank.", "Have a nice day!"];

type LineHandler<R, W> = fn(&mut Shell<R, W>, &str) -> Result<(), CommandError>;

/// Menu-driven session over a ledger
pub struct Shell<R, W> {
    ledger: Ledger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(ledger: Ledger, input: R, output: W) -> Self {
        Shell {
            ledger,
            input,
            output,
        }
    }

    /// Give back the ledger and output once the session is over
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.output)
    }

    /// Run the menu loop until `Q` or end of input
    ///
    /// # Errors
    ///
    /// Only I/O errors on the input or output end the loop with an error.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", WELCOME)?;

        loop {
            for entry in MENU {
                writeln!(self.output, "{}", entry)?;
            }

            let Some(selection) = self.prompt()? else {
                return self.farewell();
            };

            match selection.parse::<MenuAction>() {
                Ok(MenuAction::Transactions) => self.run_screen(
                    "Please enter transaction details in <Date> <Account> <Type> <Amount> format",
                    Self::handle_transaction,
                )?,
                Ok(MenuAction::InterestRules) => self.run_screen(
                    "Please enter interest rules details in <Date> <RuleId> <Rate in %> format",
                    Self::handle_interest_rule,
                )?,
                Ok(MenuAction::PrintStatement) => self.run_screen(
                    "Please enter account and month to generate the statement <Account> <Year><Month>",
                    Self::handle_statement,
                )?,
                Ok(MenuAction::Quit) => return self.farewell(),
                Err(e) => {
                    warn!("unknown menu selection '{}'", selection);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    /// Read lines for one screen until a blank line or end of input
    fn run_screen(&mut self, instructions: &str, handler: LineHandler<R, W>) -> io::Result<()> {
        writeln!(self.output, "{}", instructions)?;
        writeln!(self.output, "{}", BACK_HINT)?;

        loop {
            let line = match self.prompt()? {
                Some(line) if !line.is_empty() => line,
                _ => return Ok(()),
            };

            match handler(self, &line) {
                Ok(()) => {}
                Err(CommandError::Io(e)) => return Err(e),
                Err(e) => {
                    warn!("rejected input '{}': {}", line, e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn handle_transaction(&mut self, line: &str) -> Result<(), CommandError> {
        let request = parse_transaction_line(line)?;
        self.ledger.add_transaction(
            request.date,
            &request.account,
            request.tx_type,
            request.amount,
        )?;

        let transactions = self.ledger.account_transactions(&request.account)?;
        render::write_account_transactions(&mut self.output, &request.account, &transactions)?;
        Ok(())
    }

    fn handle_interest_rule(&mut self, line: &str) -> Result<(), CommandError> {
        let request = parse_rule_line(line)?;
        self.ledger
            .add_interest_rule(request.date, &request.rule_id, request.rate)?;

        render::write_interest_rules(&mut self.output, self.ledger.list_interest_rules())?;
        Ok(())
    }

    fn handle_statement(&mut self, line: &str) -> Result<(), CommandError> {
        let request = parse_statement_line(line)?;
        let statement = self
            .ledger
            .monthly_statement(&request.account, request.period)?;

        render::write_statement(&mut self.output, &statement)?;
        Ok(())
    }

    /// Print the prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn farewell(&mut self) -> io::Result<()> {
        for line in FAREWELL {
            writeln!(self.output, "{}", line)?;
        }
        self.output.flush()
    }
}
