//! Command layer: turns input lines into address book operations.
//!
//! - **parser**: splits input lines and builds [`Command`] values
//! - **handlers**: executes commands and produces reply text
//!
//! Failures surface as [`CommandError`](crate::error::CommandError) and are
//! rendered for the user by the session, in one place.

pub mod handlers;
pub mod parser;

pub use handlers::{execute, Outcome};
pub use parser::{parse_input, Command};
