//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, Phone};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// Duplicate phone numbers are permitted; operations that look a phone up
/// act on the first match. The name is also the lookup key in
/// [`crate::models::AddressBook`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Display name of the contact
    pub name: ContactName,

    /// Phone numbers in the order they were added
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<Phone>,

    /// Birthday, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `raw` is not exactly ten ASCII digits.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `value` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` when no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<Phone> {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(idx) => Ok(self.phones.remove(idx)),
            None => Err(BookError::PhoneNotFound(value.to_string())),
        }
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// # Errors
    ///
    /// Returns a validation error when `new` is malformed, or
    /// `BookError::PhoneNotFound` when no phone equals `old`. The record is
    /// unchanged in both cases.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = Phone::new(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// First phone equal to `value`, if any.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Parse a `DD-MM-YYYY` string and set it as the birthday.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::parse(raw).map_err(BookError::from)?;
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Days until the next occurrence of the birthday, counted from `today`.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.map(|b| b.days_until_next(today))
    }

    /// The `{name} - {phone, phone}` line used by listings and search output.
    pub fn summary(&self) -> String {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        format!("{} - {}", self.name, phones.join(", "))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Контактна Особа: {}, телефон: {}.",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record_with_phones(phones: &[&str]) -> Record {
        let mut record = Record::new("Олена");
        for phone in phones {
            record.add_phone(phone).unwrap();
        }
        record
    }

    #[test]
    fn test_add_phone_validates() {
        let mut record = Record::new("Олена");
        assert!(record.add_phone("0501234567").is_ok());
        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_add_phone_permits_duplicates() {
        let record = record_with_phones(&["0501234567", "0501234567"]);
        assert_eq!(record.phones.len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = record_with_phones(&["0501234567", "0671112233", "0501234567"]);
        let removed = record.remove_phone("0501234567").unwrap();
        assert_eq!(removed.as_str(), "0501234567");
        // The later duplicate survives
        assert_eq!(record.phones.len(), 2);
        assert_eq!(record.phones[0].as_str(), "0671112233");
        assert_eq!(record.phones[1].as_str(), "0501234567");
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = record_with_phones(&["0501234567"]);
        let err = record.remove_phone("0000000000").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match() {
        let mut record = record_with_phones(&["0501234567", "0671112233"]);
        record.edit_phone("0501234567", "0509876543").unwrap();
        assert_eq!(record.phones[0].as_str(), "0509876543");
        assert_eq!(record.phones[1].as_str(), "0671112233");
        assert!(record.find_phone("0501234567").is_none());
    }

    #[test]
    fn test_edit_phone_not_found() {
        let mut record = record_with_phones(&["0501234567"]);
        let err = record.edit_phone("0000000000", "0509876543").unwrap_err();
        assert!(matches!(err, BookError::PhoneNotFound(_)));
    }

    #[test]
    fn test_edit_phone_rejects_invalid_replacement() {
        let mut record = record_with_phones(&["0501234567"]);
        let err = record.edit_phone("0501234567", "bad").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        // Original value untouched
        assert_eq!(record.phones[0].as_str(), "0501234567");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with_phones(&["0501234567", "0671112233"]);
        assert_eq!(
            record.find_phone("0671112233").map(|p| p.as_str()),
            Some("0671112233")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday() {
        let mut record = Record::new("Олена");
        assert!(record.set_birthday("15-03-1990").is_ok());
        assert!(record.birthday.is_some());
        assert!(record.set_birthday("not a date").is_err());
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("Олена");
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(record.days_to_birthday(today), None);
    }

    #[test]
    fn test_days_to_birthday_counts_forward() {
        let mut record = Record::new("Олена");
        record.set_birthday("15-03-1990").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(record.days_to_birthday(today), Some(14));
    }

    #[test]
    fn test_display() {
        let record = record_with_phones(&["0501234567", "0671112233"]);
        assert_eq!(
            record.to_string(),
            "Контактна Особа: Олена, телефон: 0501234567; 0671112233."
        );
    }

    #[test]
    fn test_summary() {
        let record = record_with_phones(&["0501234567", "0671112233"]);
        assert_eq!(record.summary(), "Олена - 0501234567, 0671112233");
    }

    #[test]
    fn test_record_serialization_omits_empty_fields() {
        let record = Record::new("Олена");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{\"name\":\"Олена\"}");
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let json = r#"{"name":"Олена","phones":["not a phone"]}"#;
        let result: Result<Record, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
