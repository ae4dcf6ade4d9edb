//! Attendance model: the days a person was marked present.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// An immutable record of attended days.
///
/// The default value is an empty record, which is also what a person gets when
/// no attendance was ever stored for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Attendance {
    present: BTreeSet<NaiveDate>,
}

impl Attendance {
    pub fn new(present: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            present: present.into_iter().collect(),
        }
    }

    /// A new record with `date` marked present.
    pub fn mark_present(&self, date: NaiveDate) -> Self {
        let mut present = self.present.clone();
        present.insert(date);
        Self { present }
    }

    pub fn is_present(&self, date: NaiveDate) -> bool {
        self.present.contains(&date)
    }

    pub fn days_present(&self) -> usize {
        self.present.len()
    }

    /// Attended days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.present.iter().copied()
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day(s) present", self.present.len())
    }
}
