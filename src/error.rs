//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Each failure kind stays distinguishable so the command layer can
//! render a specific message instead of one generic complaint.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// No contact with the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The contact has no phone with the given value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur while loading or saving the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the book file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON or holds invalid field values
    #[error("Malformed book file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The book file was written in an unknown format version
    #[error("Unsupported book file version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur while executing a single user command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Arguments missing or misshapen; carries the exact hint to show
    #[error("{0}")]
    Usage(&'static str),

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Fatal failures that end an interactive session.
#[derive(Error, Debug)]
pub enum ReplError {
    /// Console I/O failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Persisting the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}
