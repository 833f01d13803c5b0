//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {}. Phone number must contain exactly 10 digits",
                phone
            ),
            Self::InvalidBirthday(date) => write!(
                f,
                "Invalid date format: {}. Use DD.MM.YYYY",
                date
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
