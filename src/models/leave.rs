//! Leave model: a continuous block of days away from work.

use crate::domain::hire::{parse_date, DATE_FORMAT};
use crate::domain::{FieldKind, ValidationError};
use chrono::NaiveDate;
use std::fmt;

/// An approved leave period, inclusive of both `start` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Leave {
    start: NaiveDate,
    end: NaiveDate,
}

impl Leave {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Leave should have a start and end date in the format YYYY-MM-DD, and end on or after its start";

    /// Create a leave period.
    ///
    /// # Errors
    ///
    /// Returns a `ConstraintViolation` for [`FieldKind::Leave`] if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::constraint(
                FieldKind::Leave,
                Self::MESSAGE_CONSTRAINTS,
            ));
        }
        Ok(Self { start, end })
    }

    /// Create a leave period from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::constraint(FieldKind::Leave, Self::MESSAGE_CONSTRAINTS);
        let start = parse_date(start).ok_or_else(invalid)?;
        let end = parse_date(end).ok_or_else(invalid)?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `date` falls within this leave.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for Leave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}
