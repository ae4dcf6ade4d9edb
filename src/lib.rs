//! Staffbook - validated personnel records with a lossless JSON store.
//!
//! A staff book holds one record per person: name, NRIC, contact details,
//! hire date, tags, leave periods and attendance. Every field is validated when
//! it is created, whether it comes from a typed command or from the data file,
//! and a record written to disk reads back equal to the original.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`Name`, `Nric`, `Phone`, `Email`, `Address`, `Hire`, `Tag`) and `TagSet`
//! - **models**: The `Person` aggregate, `Leave`, `Attendance` and the `Roster` collection
//! - **storage**: Persisted forms (`JsonPerson`, ...) and the roster file
//! - **parser**: Command-line tokenizing and the `add` command parser
//! - **commands**: Command execution against a roster
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;

// Re-export commonly used types
pub use commands::{Command, CommandOutcome};
pub use config::Config;
pub use domain::{Address, Email, FieldKind, Hire, Name, Nric, Phone, Tag, TagSet, ValidationError};
pub use error::{
    CommandError, ConfigError, IllegalValueError, ModelError, ParseError, RosterError, StorageError,
};
pub use models::{Attendance, Leave, Person, PersonBuilder, Roster};
pub use parser::parse_command;
pub use storage::{JsonPerson, JsonRoster, JsonRosterStorage};
