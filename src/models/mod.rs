//! Data models for the address book.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UpcomingBirthday, BIRTHDAY_WINDOW_DAYS};
pub use record::Record;
