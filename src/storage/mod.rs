//! JSON persistence for the address book.
//!
//! The whole book is written to a single file on every save and read back
//! in full on load. The file carries a format version so a future layout
//! change is detected instead of mis-read.

use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current book file format version.
const FORMAT_VERSION: u32 = 1;

/// On-disk shape of the book file, as read back.
#[derive(Debug, Deserialize)]
struct BookFile {
    version: u32,
    contacts: AddressBook,
}

/// On-disk shape of the book file, as written. Borrows the book to avoid
/// cloning it on every save.
#[derive(Debug, Serialize)]
struct BookFileRef<'a> {
    version: u32,
    contacts: &'a AddressBook,
}

/// Loads and saves an [`AddressBook`] as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for the given file path. Nothing is touched on disk
    /// until [`load`](Self::load) or [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the persisted file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the book from disk. A missing file yields an empty book.
    ///
    /// # Errors
    ///
    /// Any I/O failure other than "file missing", malformed JSON, an invalid
    /// field value, or an unknown format version.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "book file missing, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: BookFile = serde_json::from_str(&raw)?;
        if file.version != FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(file.version));
        }

        info!(
            path = %self.path.display(),
            contacts = file.contacts.len(),
            "book loaded"
        );
        Ok(file.contacts)
    }

    /// Write the whole book to disk, replacing the previous contents.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let file = BookFileRef {
            version: FORMAT_VERSION,
            contacts: book,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json)?;

        debug!(
            path = %self.path.display(),
            contacts = book.len(),
            "book saved"
        );
        Ok(())
    }
}
