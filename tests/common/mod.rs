//! Shared helpers for integration tests.

use staffbook::Person;

pub mod fixtures;

/// Assert that a person read back from storage matches the original, field by field,
/// so a failure points at the field that drifted.
#[allow(dead_code)]
pub fn assert_same_fields(actual: &Person, expected: &Person) {
    assert_eq!(actual.name(), expected.name(), "name differs");
    assert_eq!(actual.nric(), expected.nric(), "nric differs");
    assert_eq!(actual.phone(), expected.phone(), "phone differs");
    assert_eq!(actual.email(), expected.email(), "email differs");
    assert_eq!(actual.address(), expected.address(), "address differs");
    assert_eq!(actual.hire(), expected.hire(), "hire differs");
    assert_eq!(actual.tags(), expected.tags(), "tags differ");
    assert_eq!(actual.leaves(), expected.leaves(), "leaves differ");
    assert_eq!(actual.attendance(), expected.attendance(), "attendance differs");
    assert_eq!(actual, expected);
}
