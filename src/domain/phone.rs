//! Phone value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are stored as plain digit strings without formatting
/// characters.
///
/// # Example
///
/// ```
/// use staffbook::domain::Phone;
///
/// let phone = Phone::new("98765432").unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Digits only, no spaces, hyphens or `+`
    /// - At least 3 digits
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::constraint(
                FieldKind::Phone,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(phone))
    }

    /// Returns true if `phone` would be accepted by [`Phone::new`].
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
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
        let phone = Phone::new("98765432").unwrap();
        assert_eq!(phone.as_str(), "98765432");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new(" ").is_err());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("phone").is_err());
        assert!(Phone::new("9011p041").is_err());
        assert!(Phone::new("9312 1534").is_err());
        assert!(Phone::new("+6591234567").is_err());
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("93121534").is_ok());
        assert!(Phone::new("124293842033123").is_ok());
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("93121534").unwrap();
        assert_eq!(format!("{}", phone), "93121534");
    }
}
