//! Roster: the ordered list of persons in the staff book.

use super::Person;
use crate::error::{RosterError, RosterResult};

/// An ordered collection of persons, unique by name.
///
/// Uniqueness uses [`Person::is_same_person`], so two records that differ only
/// in contact details still count as duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    persons: Vec<Person>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from persons in the given order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicatePerson` for the first person whose name
    /// was already seen.
    pub fn from_persons(persons: Vec<Person>) -> RosterResult<Self> {
        for (i, person) in persons.iter().enumerate() {
            if persons[..i].iter().any(|p| p.is_same_person(person)) {
                return Err(RosterError::DuplicatePerson(person.name().clone()));
            }
        }
        Ok(Self { persons })
    }

    /// Returns true if a person with the same identity as `person` exists.
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// A new roster with `person` appended.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::DuplicatePerson` if the name is already taken.
    pub fn with_person(&self, person: Person) -> RosterResult<Self> {
        if self.contains(&person) {
            return Err(RosterError::DuplicatePerson(person.name().clone()));
        }
        let mut persons = self.persons.clone();
        persons.push(person);
        Ok(Self { persons })
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
