//! Data models for staff book entities.
//!
//! This module contains the `Person` aggregate, which composes the validated
//! value objects from [`crate::domain`], the leave and attendance records it
//! carries, and the `Roster` collection that keeps persons unique by name.

pub mod attendance;
pub mod leave;
pub mod person;
pub mod roster;

pub use attendance::Attendance;
pub use leave::Leave;
pub use person::{Person, PersonBuilder};
pub use roster::Roster;
