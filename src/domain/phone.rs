//! Phone value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// A phone number is exactly ten ASCII digits; anything else cannot be
/// represented.
///
/// # Example
///
/// ```
/// use kontakty::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Required number of digits.
    pub const LEN: usize = 10;

    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the value is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        phone.len() == Self::LEN && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("no digits").is_err());
        assert!(Phone::new("050123456").is_err()); // nine digits
        assert!(Phone::new("05012345678").is_err()); // eleven digits
        assert!(Phone::new("050123456x").is_err());
        assert!(Phone::new("050 123 45").is_err());
        assert!(Phone::new("+380501234").is_err());
        assert!(Phone::new("0000000000").is_ok());
        assert!(Phone::new("0501234567").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are digits but not ASCII digits
        assert!(Phone::new("٠٥٠١٢٣٤٥٦٧").is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(format!("{}", phone), "0501234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"050-123-45\"");
        assert!(result.is_err());
    }
}
