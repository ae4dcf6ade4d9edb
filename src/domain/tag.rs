//! Tag value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9 .,'\-]+$").expect("Failed to compile tag regex"));

/// A free-form label attached to a person, e.g. `manager` or `part-time`.
///
/// # Example
///
/// ```
/// use staffbook::domain::Tag;
///
/// let tag = Tag::new("team lead").unwrap();
/// assert_eq!(tag.as_str(), "team lead");
/// assert!(Tag::new("#hr").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric, \
        non-empty, and can include spaces and punctuation like .,'-";

    /// Create a new Tag, validating the character set.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if !Self::is_valid(&tag) {
            return Err(ValidationError::constraint(
                FieldKind::Tag,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(tag))
    }

    /// Returns true if `tag` would be accepted by [`Tag::new`].
    pub fn is_valid(tag: &str) -> bool {
        TAG_REGEX.is_match(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
