//! Address value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// The first character must not be whitespace, otherwise " " would be valid.
static ADDRESS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("Failed to compile address regex"));

/// A residential address. Any text is accepted as long as it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    /// Create a new Address, validating that it is not blank.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::constraint(
                FieldKind::Address,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(address))
    }

    pub fn is_valid(address: &str) -> bool {
        ADDRESS_REGEX.is_match(address)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_validates_format() {
        assert!(Address::new("").is_err());
        assert!(Address::new(" ").is_err());
        assert!(Address::new(" 21 Lower Kent Ridge Rd").is_err());
        assert!(Address::new("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::new("-").is_ok());
        assert!(
            Address::new("Leng Inc; 1234 Market St; San Francisco CA 2349879; USA").is_ok()
        );
    }

    #[test]
    fn test_address_keeps_input_verbatim() {
        let address = Address::new("21 Lower Kent Ridge Rd ").unwrap();
        assert_eq!(address.as_str(), "21 Lower Kent Ridge Rd ");
    }
}
