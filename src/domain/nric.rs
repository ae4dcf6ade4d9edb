//! Nric value object.

use super::errors::{FieldKind, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NRIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[STFGM][0-9]{7}[A-Z]$").expect("Failed to compile NRIC regex"));

/// A national registration identity card number.
///
/// An NRIC is a prefix letter (S, T, F, G or M), seven digits and an
/// uppercase checksum letter, e.g. `S1234567A`. The checksum letter itself
/// is not verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nric(String);

impl Nric {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "NRIC should start with S, T, F, G or M, followed by 7 digits and end with an uppercase letter";

    /// Create a new Nric, validating the format.
    pub fn new(nric: impl Into<String>) -> Result<Self, ValidationError> {
        let nric = nric.into();
        if !Self::is_valid(&nric) {
            return Err(ValidationError::constraint(
                FieldKind::Nric,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self(nric))
    }

    /// Returns true if `nric` would be accepted by [`Nric::new`].
    pub fn is_valid(nric: &str) -> bool {
        NRIC_REGEX.is_match(nric)
    }

    /// Get the NRIC as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Nric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
