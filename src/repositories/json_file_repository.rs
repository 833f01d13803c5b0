use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single pretty-printed JSON file.
///
/// A missing file loads as an empty book. Saves go through a sibling
/// temporary file that is renamed over the target, so an interrupted save
/// never leaves a half-written book behind.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book loaded"
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(book)?;
        let tmp = self.temp_path();

        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(tmp = %tmp.display(), "Replaced address book file");
        info!(
            path = %self.path.display(),
            contacts = book.len(),
            "Address book saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    fn sample_book() -> AddressBook {
        let mut book = AddressBook::new();
        let mut anna = Record::new("Anna").unwrap();
        anna.add_phone("1111111111").unwrap();
        anna.add_phone("2222222222").unwrap();
        anna.set_birthday("05.06.1990").unwrap();
        book.add_record(anna);
        book.add_record(Record::new("Bob").unwrap());
        book
    }

    #[test]
    fn test_load_missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("missing.json"));
        let book = repo.load().unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));
        let book = sample_book();

        repo.save(&book).unwrap();
        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());

        let restored = repo.load().unwrap();
        assert_eq!(restored, book);
    }

    #[test]
    fn test_save_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("book.json"));

        repo.save(&sample_book()).unwrap();
        repo.save(&AddressBook::new()).unwrap();

        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        fs::write(&path, "not json").unwrap();

        let result = JsonFileRepository::new(&path).load();
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nope").join("book.json"));
        let result = repo.save(&sample_book());
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
