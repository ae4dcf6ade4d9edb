//! Name value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex")
});

/// A person's full name.
///
/// Names are alphanumeric words separated by spaces. The first character
/// must not be a space, so a blank name can never be constructed.
///
/// # Example
///
/// ```
/// use staffbook::domain::Name;
///
/// let name = Name::new("Alex Yeo").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `ConstraintViolation` for [`FieldKind::Name`] if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::constraint(
                FieldKind::Name,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(name))
    }

    /// Returns true if `name` would be accepted by [`Name::new`].
    pub fn is_valid(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = Name::new("Alex Yeo").unwrap();
        assert_eq!(name.as_str(), "Alex Yeo");
    }

    #[test]
    fn test_name_validates_format() {
        assert!(Name::new("").is_err());
        assert!(Name::new(" ").is_err());
        assert!(Name::new(" Alex").is_err());
        assert!(Name::new("Alex^").is_err());
        assert!(Name::new("Alex*Yeo").is_err());
        assert!(Name::new("alex").is_ok());
        assert!(Name::new("12345").is_ok());
        assert!(Name::new("Peter the 2nd").is_ok());
        assert!(Name::new("David Roger Jackson Ray Jr 2nd").is_ok());
    }

    #[test]
    fn test_name_error_carries_fixed_message() {
        let err = Name::new("Alex!").unwrap_err();
        assert_eq!(err.kind(), FieldKind::Name);
        assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_name_equality() {
        assert_eq!(Name::new("Alex").unwrap(), Name::new("Alex").unwrap());
        assert_ne!(Name::new("Alex").unwrap(), Name::new("alex").unwrap());
    }
}
