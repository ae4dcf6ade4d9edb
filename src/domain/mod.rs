//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a personnel
//! record: names, NRICs, phone numbers, email addresses, addresses, hire
//! dates and tags. Every wrapper validates its input at construction time,
//! so an invalid string can never be represented in the system.

pub mod address;
pub mod email;
pub mod errors;
pub mod hire;
pub mod name;
pub mod nric;
pub mod phone;
pub mod tag;
pub mod tag_set;

pub use address::Address;
pub use email::Email;
pub use errors::{FieldKind, ValidationError};
pub use hire::Hire;
pub use name::Name;
pub use nric::Nric;
pub use phone::Phone;
pub use tag::Tag;
pub use tag_set::TagSet;
