//! Persistence for the staff book.
//!
//! Each model type has a plain `Json*` mirror whose fields are raw strings and
//! optional values. The mirrors are what serde reads and writes; the
//! `to_model`/`from_model` pairs are where validation happens.

pub mod json_attendance;
pub mod json_leave;
pub mod json_person;
pub mod json_roster;
pub mod json_tag;
pub mod roster_storage;

pub use json_attendance::JsonAttendance;
pub use json_leave::JsonLeave;
pub use json_person::JsonPerson;
pub use json_roster::JsonRoster;
pub use json_tag::JsonTag;
pub use roster_storage::JsonRosterStorage;

use serde::{Deserialize, Deserializer};

/// Deserializes a list that may be written as `null`, treating `null` as empty.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default())
}
