//! Persisted form of a leave period.

use crate::domain::hire::DATE_FORMAT;
use crate::domain::{FieldKind, ValidationError};
use crate::models::Leave;
use serde::{Deserialize, Serialize};

/// A leave period as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonLeave {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl JsonLeave {
    pub fn from_model(leave: &Leave) -> Self {
        Self {
            start: Some(leave.start().format(DATE_FORMAT).to_string()),
            end: Some(leave.end().format(DATE_FORMAT).to_string()),
        }
    }

    /// Rebuild the leave; a missing bound is reported like a malformed one.
    pub fn to_model(&self) -> Result<Leave, ValidationError> {
        match (&self.start, &self.end) {
            (Some(start), Some(end)) => Leave::parse(start, end),
            _ => Err(ValidationError::constraint(
                FieldKind::Leave,
                Leave::MESSAGE_CONSTRAINTS,
            )),
        }
    }
}
