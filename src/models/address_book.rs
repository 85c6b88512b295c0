//! AddressBook: the name → record mapping and its operations.

use super::Record;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of attempting to add a record.
///
/// Adding never overwrites. When the name is already taken the candidate
/// record is handed back untouched so the caller can ask the user what to
/// do; the data layer itself performs no console I/O.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The record was inserted under a new name
    Added,

    /// A record with this name already exists; the book is unchanged and
    /// the rejected candidate is returned
    NeedsConfirmation(Record),
}

/// The collection of all contacts, keyed by the contact's name.
///
/// Kept fully in memory and iterated in name order. Persistence is a full
/// rewrite of the file, handled by [`crate::storage::JsonStore`] after each
/// mutating command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, or report that the name is taken.
    pub fn add_record(&mut self, record: Record) -> AddOutcome {
        let key = record.name.as_str().to_string();
        if self.records.contains_key(&key) {
            return AddOutcome::NeedsConfirmation(record);
        }
        self.records.insert(key, record);
        AddOutcome::Added
    }

    /// Replace the first phone of the named record with `new_phone`.
    ///
    /// A record that has no phones yet gets the new phone appended instead.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` for an unknown name, or a
    /// validation error when `new_phone` is malformed.
    pub fn edit_record(&mut self, name: &str, new_phone: &str) -> BookResult<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        match record.phones.first().map(|p| p.as_str().to_string()) {
            Some(old) => record.edit_phone(&old, new_phone),
            None => record.add_phone(new_phone),
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Remove a record by exact name and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` when no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Records whose name or any phone contains `query` as a substring.
    ///
    /// Each matching record appears once, regardless of how many of its
    /// phones match.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| {
                record.name.as_str().contains(query)
                    || record.phones.iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Iterate records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
