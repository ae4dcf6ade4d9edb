//! Email value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// local-part: alphanumeric runs joined by single special characters.
// domain: dot-separated labels, the last one at least two characters long.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+(?:[+_.\-][A-Za-z0-9]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use staffbook::domain::Email;
///
/// let email = Email::new("alex@example.com").unwrap();
/// assert_eq!(email.as_str(), "alex@example.com");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Errors
    ///
    /// Returns a `ConstraintViolation` for [`FieldKind::Email`] if the format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !Self::is_valid(&email) {
            return Err(ValidationError::constraint(
                FieldKind::Email,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(email))
    }

    /// Returns true if `email` would be accepted by [`Email::new`].
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
