//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Input and display format: day-month-year.
const FORMAT: &str = "%d-%m-%Y";

/// A contact's birthday, stored as a real calendar date.
///
/// Parsed strictly from `DD-MM-YYYY`; an unparseable string is rejected at
/// construction time instead of being kept as loose text.
///
/// # Example
///
/// ```
/// use kontakty::domain::Birthday;
///
/// let birthday = Birthday::parse("15-03-1990").unwrap();
/// assert_eq!(birthday.to_string(), "15-03-1990");
/// assert!(Birthday::parse("1990-03-15").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the string does not
    /// parse as a real calendar date in that format.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Days until the next occurrence of this birthday's month and day,
    /// counted from `today`.
    ///
    /// The stored year is ignored; the count is zero on the day itself and
    /// rolls into next year once this year's date has passed. A 29 February
    /// birthday falls on 1 March in non-leap years.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        let this_year = self.occurrence_in(today.year());
        let next = if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        };
        (next - today).num_days()
    }

    /// The date this birthday falls on in `year`. Only 29 February can be
    /// missing from a year; it maps to 1 March.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

// Serde support - serialize as a DD-MM-YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
