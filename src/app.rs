//! Application lifecycle: load the book, run one session, save the book.

use crate::repositories::BookRepository;
use crate::session::Session;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::{error, info};

/// Run one interactive session against the book stored in `repository`.
///
/// The book is saved even when the session ends with an I/O error, so edits
/// made before the failure are kept. The session error is returned after the
/// save attempt.
pub fn run_app<B, R, W>(
    repository: &B,
    clock: fn() -> NaiveDate,
    input: R,
    output: W,
) -> Result<()>
where
    B: BookRepository,
    R: BufRead,
    W: Write,
{
    let book = repository.load().context("Failed to load address book")?;

    let mut session = Session::with_clock(book, clock);
    let session_result = session.run(input, output);

    let save_result = repository.save(session.book());
    if let Err(e) = &save_result {
        error!("Failed to save address book: {}", e);
    }

    session_result.context("Interactive session failed")?;
    save_result.context("Failed to save address book")?;

    info!(contacts = session.book().len(), "Session finished");
    Ok(())
}
