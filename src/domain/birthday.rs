//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// External textual format of a birthday.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono's `%d`/`%Y` parsers accept unpadded or signed input, so the exact
// shape is checked up front.
static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{4})$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth, parsed from `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("05.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "05.06.1990");
/// assert!(Birthday::parse("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from the `DD.MM.YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not match
    /// the pattern or does not denote a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        let caps = BIRTHDAY_REGEX.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The underlying date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Render back to `DD.MM.YYYY`, zero padded.
    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }

    /// The birthday's month and day in the given year.
    ///
    /// A Feb 29 birthday falls on Mar 1 in non-leap years. Returns `None`
    /// only when `year` is outside chrono's supported range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }

    /// The first occurrence of this birthday on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

// Serde support - serialize in the same DD.MM.YYYY format users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.format().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
