//! Data models for the address book.
//!
//! This module contains the data structures representing contacts and the
//! collection that owns them.

pub mod address_book;
pub mod record;

pub use address_book::{AddOutcome, AddressBook};
pub use record::Record;
