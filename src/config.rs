//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the persisted address book.
pub const DEFAULT_BOOK_FILE: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book file (default: "addressbook.json")
    pub book_file: PathBuf,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the address book file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let book_file = match env::var("ADDRESS_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from(DEFAULT_BOOK_FILE),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from(DEFAULT_BOOK_FILE),
            log_level: "error".to_string(),
        }
    }
}
