//! kontakty - a Ukrainian-language personal address book for the terminal.
//!
//! This library provides the contact model, a JSON-backed persistent
//! address book, and the interactive command loop that drives it.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the contact record and the address book collection
//! - **storage**: versioned JSON persistence of the whole book to one file
//! - **repl**: command parsing, handlers, and the read-eval-print loop
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, ReplError, StorageError};
pub use models::{AddOutcome, AddressBook, Record};
pub use repl::{Command, Repl};
pub use storage::JsonStore;
