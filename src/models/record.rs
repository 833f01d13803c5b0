//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: name, phone numbers and an optional birthday.
///
/// The name is the contact's identity in the [`AddressBook`](super::AddressBook)
/// and cannot change after creation. Every mutation validates its input first,
/// so a failed call leaves the record exactly as it was.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    /// Phone numbers in insertion order (duplicates allowed)
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are not checked.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Absent numbers are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Nothing changes when `old` is not on the record. `new` is validated
    /// before the lookup, so an invalid replacement always fails.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            *slot = replacement;
        }
        Ok(())
    }

    /// Parse and store a birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns 0 on the birthday itself and `None` when no birthday is set.
    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let next = self.birthday.as_ref()?.next_occurrence(today)?;
        Some((next - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self
            .birthday
            .map(|b| b.format())
            .unwrap_or_else(|| "Not set".to_string());
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
