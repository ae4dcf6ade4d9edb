//! Hire date value object.

use super::errors::{FieldKind, ValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to compile date regex")
});

/// Parse a zero-padded `YYYY-MM-DD` calendar date.
///
/// Chrono alone also accepts `2024-3-1` and `+2024-03-01`, which would not
/// be written back in the same form.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !DATE_REGEX.is_match(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// The date a person joined the organization.
///
/// The raw `YYYY-MM-DD` text is kept alongside the parsed date so the value
/// is written back exactly as it was read.
///
/// # Example
///
/// ```
/// use staffbook::domain::Hire;
///
/// let hire = Hire::new("2023-01-01").unwrap();
/// assert_eq!(hire.as_str(), "2023-01-01");
/// assert!(Hire::new("2023-02-30").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hire {
    raw: String,
    date: NaiveDate,
}

impl Hire {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Hire dates should be valid calendar dates in the format YYYY-MM-DD";

    /// Create a new Hire date, validating both shape and calendar validity.
    pub fn new(hire: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = hire.into();
        match parse_date(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::constraint(
                FieldKind::Hire,
                Self::MESSAGE_CONSTRAINTS,
            )),
        }
    }

    /// Returns true if `hire` would be accepted by [`Hire::new`].
    pub fn is_valid(hire: &str) -> bool {
        parse_date(hire).is_some()
    }

    /// Get the hire date as the original string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the hire date as a calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl fmt::Display for Hire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
