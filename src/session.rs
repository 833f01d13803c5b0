//! Interactive command session.
//!
//! Reads one command per line, applies it to the address book and writes the
//! reply. Command failures are turned into user text here and nowhere else.

use crate::commands::{execute, parse_input, Command, Outcome};
use crate::models::AddressBook;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Today's date in the local time zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// One interactive session over an owned address book.
pub struct Session {
    book: AddressBook,
    clock: fn() -> NaiveDate,
}

impl Session {
    /// Create a session; `clock` supplies "today" for birthday queries
    /// (`local_today` in the binary).
    pub fn with_clock(book: AddressBook, clock: fn() -> NaiveDate) -> Self {
        Self { book, clock }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle a single input line. Blank lines produce no outcome.
    pub fn handle_line(&mut self, line: &str) -> Option<Outcome> {
        let (word, args) = parse_input(line)?;
        debug!(command = %word, args = args.len(), "Handling command");

        let result = Command::parse(&word, &args)
            .and_then(|command| execute(command, &mut self.book, (self.clock)()));

        Some(match result {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(command = %word, error = %e, "Command failed");
                Outcome::Continue(e.user_message())
            }
        })
    }

    /// Run the read-dispatch-print loop until `exit`/`close` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                info!("Input closed, ending session");
                writeln!(output)?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and fall through to the parser
            let line = String::from_utf8_lossy(&buf);
            match self.handle_line(&line) {
                Some(Outcome::Continue(message)) => writeln!(output, "{}", message)?,
                Some(Outcome::Exit(message)) => {
                    writeln!(output, "{}", message)?;
                    info!("Session ended by user");
                    return Ok(());
                }
                None => {}
            }
        }
    }
}
