use crate::error::StorageResult;
use crate::models::AddressBook;

/// Repository for persisting the whole address book.
///
/// The book is always loaded and saved as a unit, enabling different
/// implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the persisted book. A missing store yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the persisted book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
