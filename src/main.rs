//! Contact assistant - Main entry point
//!
//! Loads the address book, runs the interactive command session on
//! stdin/stdout and saves the book when the session ends.

use anyhow::{Context, Result};
use contact_assistant::repositories::JsonFileRepository;
use contact_assistant::session::local_today;
use contact_assistant::{run_app, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they never interleave with the prompt on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file: {}", config.book_file.display());

    let repository = JsonFileRepository::new(&config.book_file);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = run_app(&repository, local_today, stdin.lock(), stdout.lock()) {
        error!("Contact assistant stopped with an error: {:#}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
