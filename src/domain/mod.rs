//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. These value objects validate at
//! construction time and prevent invalid data from being represented in
//! the address book.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
