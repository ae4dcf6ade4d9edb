//! Persisted form of an attendance record.

use super::null_as_empty;
use crate::domain::hire::{parse_date, DATE_FORMAT};
use crate::models::Attendance;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Attendance as stored on disk: the attended days as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonAttendance {
    #[serde(deserialize_with = "null_as_empty")]
    pub present: Vec<String>,
}

impl JsonAttendance {
    pub fn from_model(attendance: &Attendance) -> Self {
        Self {
            present: attendance
                .iter()
                .map(|d| d.format(DATE_FORMAT).to_string())
                .collect(),
        }
    }

    /// Rebuild the attendance record. Never fails: unreadable dates are
    /// dropped and logged.
    pub fn to_model(&self) -> Attendance {
        Attendance::new(self.present.iter().filter_map(|raw| {
            let date = parse_date(raw);
            if date.is_none() {
                warn!("Dropping unreadable attendance date {:?}", raw);
            }
            date
        }))
    }
}
