//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced while executing a user command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("not enough arguments for '{command}'. Usage: {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// No contact with the given name exists
    #[error("contact not found: {0}")]
    ContactNotFound(String),

    /// A phone number, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command word is not recognised
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl CommandError {
    /// Text shown to the user for this error.
    ///
    /// This is the single place where command failures become display text.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingArguments { usage, .. } => {
                format!("Error: not enough arguments. Usage: {}", usage)
            }
            Self::ContactNotFound(_) => "Error: contact not found.".to_string(),
            Self::Validation(e) => format!("Error: {}", e),
            Self::UnknownCommand(_) => "Invalid command.".to_string(),
        }
    }
}

/// Errors that can occur when loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The book file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
