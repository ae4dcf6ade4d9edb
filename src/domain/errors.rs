//! Domain validation errors.

use std::fmt;
use thiserror::Error;

/// The kind of field a value or error refers to.
///
/// The display form is the bare kind name ("Name", "Nric", ...), which is what
/// missing-field messages interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Nric,
    Phone,
    Email,
    Address,
    Hire,
    Tag,
    Leave,
    Attendance,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "Name",
            Self::Nric => "Nric",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Address => "Address",
            Self::Hire => "Hire",
            Self::Tag => "Tag",
            Self::Leave => "Leave",
            Self::Attendance => "Attendance",
        };
        f.write_str(label)
    }
}

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw input does not satisfy the kind's format predicate.
    ///
    /// `message` is the kind's fixed constraint text and is displayed verbatim.
    #[error("{message}")]
    ConstraintViolation {
        kind: FieldKind,
        message: &'static str,
    },
}

impl ValidationError {
    pub(crate) fn constraint(kind: FieldKind, message: &'static str) -> Self {
        Self::ConstraintViolation { kind, message }
    }

    /// The field kind whose constraint was violated.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::ConstraintViolation { kind, .. } => *kind,
        }
    }

    /// The fixed constraint message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::ConstraintViolation { message, .. } => message,
        }
    }
}
