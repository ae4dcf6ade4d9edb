//! Error types for staffbook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level validation errors live in [`crate::domain::errors`].

use crate::domain::{FieldKind, Name, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rebuilding a person from its persisted form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalValueError {
    /// A required scalar field is absent.
    #[error("Person's {0} field is missing!")]
    MissingField(FieldKind),

    /// A scalar field is present but fails its format predicate.
    #[error(transparent)]
    ConstraintViolation(ValidationError),

    /// A tag or leave element failed its own conversion.
    #[error(transparent)]
    InvalidTagOrLeave(ValidationError),
}

/// Errors raised when assembling a person outside the persisted-form path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A required field was never supplied.
    #[error("Person's {0} field must be present")]
    NullOrMissingField(FieldKind),
}

/// Errors raised by the roster collection itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Two persons share a name.
    #[error("Duplicate person: {0}")]
    DuplicatePerson(Name),
}

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The command is malformed; carries the usage text for that command.
    #[error("Invalid command format! \n{0}")]
    InvalidCommandFormat(String),

    /// One or more single-valued prefixes were given more than once.
    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    /// A field value failed validation. Displays the constraint message verbatim.
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// The first word is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Errors that can occur when executing a command against a roster.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A person with the same name already exists.
    #[error("This person already exists in the staff book: {0}")]
    DuplicatePerson(Name),
}

impl From<RosterError> for CommandError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::DuplicatePerson(name) => CommandError::DuplicatePerson(name),
        }
    }
}

/// Errors that can occur when reading or writing the roster file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON for a roster document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record violates a field constraint
    #[error("Invalid person record at index {index}: {source}")]
    IllegalValue {
        index: usize,
        #[source]
        source: IllegalValueError,
    },

    /// Two stored records share a name
    #[error("Persons list contains duplicate person(s): {0}")]
    DuplicatePerson(Name),

    /// The data file does not exist and creating one was disabled
    #[error("Data file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl From<RosterError> for StorageError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::DuplicatePerson(name) => StorageError::DuplicatePerson(name),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with IllegalValueError
pub type IllegalValueResult<T> = Result<T, IllegalValueError>;

/// Convenience type alias for Results with RosterError
pub type RosterResult<T> = Result<T, RosterError>;

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Nric;

    #[test]
    fn test_error_display() {
        let err = IllegalValueError::MissingField(FieldKind::Name);
        assert_eq!(err.to_string(), "Person's Name field is missing!");

        let err = ModelError::NullOrMissingField(FieldKind::Hire);
        assert_eq!(err.to_string(), "Person's Hire field must be present");

        let err = ConfigError::InvalidValue {
            var: "STAFFBOOK_DATA_FILE".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for STAFFBOOK_DATA_FILE: Cannot be empty"
        );
    }

    #[test]
    fn test_roster_error_maps_to_layer_messages() {
        let name = Name::new("Amy").unwrap();

        let err = CommandError::from(RosterError::DuplicatePerson(name.clone()));
        assert_eq!(err.to_string(), "This person already exists in the staff book: Amy");

        let err = StorageError::from(RosterError::DuplicatePerson(name));
        assert_eq!(err.to_string(), "Persons list contains duplicate person(s): Amy");
    }

    #[test]
    fn test_constraint_messages_pass_through_unchanged() {
        let inner = Nric::new("123").unwrap_err();

        let err = IllegalValueError::ConstraintViolation(inner.clone());
        assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS);

        let err = IllegalValueError::InvalidTagOrLeave(inner.clone());
        assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS);

        let err = ParseError::from(inner);
        assert_eq!(err.to_string(), Nric::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_duplicate_prefixes_display() {
        let err = ParseError::DuplicatePrefixes(vec!["/name".to_string(), "/phone".to_string()]);
        assert_eq!(
            err.to_string(),
            "Multiple values specified for the following single-valued field(s): /name /phone"
        );
    }
}
