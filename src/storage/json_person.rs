//! Persisted form of a person and its conversion to and from the model.
//!
//! The conversion is hand-written rather than derived so that the order in
//! which fields are checked is fixed, and with it the error reported for a
//! record that has several problems.

use super::{null_as_empty, JsonAttendance, JsonLeave, JsonTag};
use crate::domain::{Address, Email, FieldKind, Hire, Name, Nric, Phone, TagSet, ValidationError};
use crate::error::{IllegalValueError, IllegalValueResult};
use crate::models::{Attendance, Person};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A person as stored on disk.
///
/// Every field is optional here because stored data may be incomplete or
/// edited by hand; [`JsonPerson::to_model`] decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonPerson {
    pub name: Option<String>,
    pub nric: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub hire: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<JsonTag>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub leaves: Vec<JsonLeave>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance: Option<JsonAttendance>,
}

impl JsonPerson {
    /// Convert a person into its persisted form. Never fails.
    pub fn from_model(person: &Person) -> Self {
        Self {
            name: Some(person.name().as_str().to_string()),
            nric: Some(person.nric().as_str().to_string()),
            phone: Some(person.phone().as_str().to_string()),
            email: Some(person.email().as_str().to_string()),
            address: Some(person.address().as_str().to_string()),
            hire: Some(person.hire().as_str().to_string()),
            tags: person.tags().iter().map(JsonTag::from_model).collect(),
            leaves: person.leaves().iter().map(JsonLeave::from_model).collect(),
            attendance: Some(JsonAttendance::from_model(person.attendance())),
        }
    }

    /// Convert this persisted form back into a validated person.
    ///
    /// Fields are checked in the order name, nric, phone, email, address,
    /// hire, then each tag, then each leave. The first problem found is
    /// returned. A missing attendance record is replaced by an empty one.
    ///
    /// # Errors
    ///
    /// - `MissingField` if a scalar field is absent
    /// - `ConstraintViolation` if a scalar field is malformed
    /// - `InvalidTagOrLeave` with the element's own error if any tag or leave is malformed
    pub fn to_model(&self) -> IllegalValueResult<Person> {
        let person = self.convert();
        if let Err(e) = &person {
            debug!("Rejected stored person {:?}: {}", self.name, e);
        }
        person
    }

    fn convert(&self) -> IllegalValueResult<Person> {
        let name = required(&self.name, FieldKind::Name, Name::new)?;
        let nric = required(&self.nric, FieldKind::Nric, Nric::new)?;
        let phone = required(&self.phone, FieldKind::Phone, Phone::new)?;
        let email = required(&self.email, FieldKind::Email, Email::new)?;
        let address = required(&self.address, FieldKind::Address, Address::new)?;
        let hire = required(&self.hire, FieldKind::Hire, Hire::new)?;

        let tags = self
            .tags
            .iter()
            .map(JsonTag::to_model)
            .collect::<Result<TagSet, _>>()
            .map_err(IllegalValueError::InvalidTagOrLeave)?;

        let leaves = self
            .leaves
            .iter()
            .map(JsonLeave::to_model)
            .collect::<Result<Vec<_>, _>>()
            .map_err(IllegalValueError::InvalidTagOrLeave)?;

        let attendance = self
            .attendance
            .as_ref()
            .map_or_else(Attendance::default, JsonAttendance::to_model);

        Ok(Person::new(
            name, nric, phone, email, address, hire, tags, leaves, attendance,
        ))
    }
}

fn required<T>(
    raw: &Option<String>,
    kind: FieldKind,
    build: impl FnOnce(String) -> Result<T, ValidationError>,
) -> IllegalValueResult<T> {
    let raw = raw.as_ref().ok_or(IllegalValueError::MissingField(kind))?;
    build(raw.clone()).map_err(IllegalValueError::ConstraintViolation)
}
