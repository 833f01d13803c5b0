//! Contact assistant - an interactive address book with birthday reminders.
//!
//! Contacts have a name, any number of 10-digit phone numbers and an optional
//! birthday. The book answers which birthdays fall in the coming week and on
//! which day to congratulate, moving weekend birthdays to a Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: `Record` and `AddressBook`, including the upcoming-birthdays query
//! - **commands**: Input parsing and command handlers
//! - **session**: The interactive read-dispatch-print loop
//! - **app**: Load, run and save lifecycle used by the binary
//! - **repositories**: Whole-book persistence (JSON file)
//! - **config**: Configuration from environment variables
//! - **error**: Error types for commands, storage and configuration

pub mod app;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use app::run_app;
pub use commands::{Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use session::Session;
