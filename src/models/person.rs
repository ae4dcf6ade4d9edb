//! Person aggregate: one validated personnel record.

use super::{Attendance, Leave};
use crate::domain::{Address, Email, FieldKind, Hire, Name, Nric, Phone, TagSet};
use crate::error::ModelError;
use std::fmt;

/// A person on the staff book.
///
/// Every field is present and already validated by its value object, so a
/// `Person` is valid for its whole lifetime. There are no setters; to change a
/// field, build a new person with [`Person::to_builder`].
///
/// Equality (`==`) compares all nine fields. Use [`Person::is_same_person`] for
/// the weaker name-only identity used to detect duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    // Identity fields
    name: Name,
    nric: Nric,
    phone: Phone,
    email: Email,

    // Data fields
    address: Address,
    hire: Hire,
    tags: TagSet,
    leaves: Vec<Leave>,
    attendance: Attendance,
}

impl Person {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        nric: Nric,
        phone: Phone,
        email: Email,
        address: Address,
        hire: Hire,
        tags: TagSet,
        leaves: Vec<Leave>,
        attendance: Attendance,
    ) -> Self {
        Self {
            name,
            nric,
            phone,
            email,
            address,
            hire,
            tags,
            leaves,
            attendance,
        }
    }

    /// Start building a person field by field.
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// A builder pre-filled with this person's fields.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            name: Some(self.name.clone()),
            nric: Some(self.nric.clone()),
            phone: Some(self.phone.clone()),
            email: Some(self.email.clone()),
            address: Some(self.address.clone()),
            hire: Some(self.hire.clone()),
            tags: self.tags.clone(),
            leaves: self.leaves.clone(),
            attendance: self.attendance.clone(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn nric(&self) -> &Nric {
        &self.nric
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn hire(&self) -> &Hire {
        &self.hire
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn leaves(&self) -> &[Leave] {
        &self.leaves
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    /// Returns true if both are the same record or share a name.
    pub fn is_same_person(&self, other: &Person) -> bool {
        std::ptr::eq(self, other) || self.name == other.name
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person{{name={}, nric={}, phone={}, email={}, address={}, hire={}, tags={}, leaves=",
            self.name, self.nric, self.phone, self.email, self.address, self.hire, self.tags
        )?;
        write_list(f, &self.leaves)?;
        write!(f, ", attendance={}}}", self.attendance)
    }
}

/// Collects the parts of a [`Person`] and checks that none is missing.
///
/// Tags, leaves and attendance default to empty; the six scalar fields must
/// all be supplied.
#[derive(Debug, Clone, Default)]
pub struct PersonBuilder {
    name: Option<Name>,
    nric: Option<Nric>,
    phone: Option<Phone>,
    email: Option<Email>,
    address: Option<Address>,
    hire: Option<Hire>,
    tags: TagSet,
    leaves: Vec<Leave>,
    attendance: Attendance,
}

impl PersonBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn nric(mut self, nric: Nric) -> Self {
        self.nric = Some(nric);
        self
    }

    pub fn phone(mut self, phone: Phone) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn hire(mut self, hire: Hire) -> Self {
        self.hire = Some(hire);
        self
    }

    pub fn tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    pub fn leaves(mut self, leaves: Vec<Leave>) -> Self {
        self.leaves = leaves;
        self
    }

    pub fn attendance(mut self, attendance: Attendance) -> Self {
        self.attendance = attendance;
        self
    }

    /// Assemble the person.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::NullOrMissingField` naming the first unset field,
    /// checked in the order name, nric, phone, email, address, hire.
    pub fn build(self) -> Result<Person, ModelError> {
        let missing = ModelError::NullOrMissingField;
        Ok(Person::new(
            self.name.ok_or(missing(FieldKind::Name))?,
            self.nric.ok_or(missing(FieldKind::Nric))?,
            self.phone.ok_or(missing(FieldKind::Phone))?,
            self.email.ok_or(missing(FieldKind::Email))?,
            self.address.ok_or(missing(FieldKind::Address))?,
            self.hire.ok_or(missing(FieldKind::Hire))?,
            self.tags,
            self.leaves,
            self.attendance,
        ))
    }
}
