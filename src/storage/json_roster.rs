//! Persisted form of the whole staff book.

use super::{null_as_empty, JsonPerson};
use crate::error::{StorageError, StorageResult};
use crate::models::Roster;
use serde::{Deserialize, Serialize};

/// The top-level JSON document: `{"persons": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonRoster {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub persons: Vec<JsonPerson>,
}

impl JsonRoster {
    pub fn from_model(roster: &Roster) -> Self {
        Self {
            persons: roster.persons().iter().map(JsonPerson::from_model).collect(),
        }
    }

    /// Convert every stored record, in order.
    ///
    /// A single bad record aborts the whole conversion.
    ///
    /// # Errors
    ///
    /// - `StorageError::IllegalValue` with the index of the first invalid record
    /// - `StorageError::DuplicatePerson` if two records share a name
    pub fn to_model(&self) -> StorageResult<Roster> {
        let persons = self
            .persons
            .iter()
            .enumerate()
            .map(|(index, json)| {
                json.to_model()
                    .map_err(|source| StorageError::IllegalValue { index, source })
            })
            .collect::<StorageResult<Vec<_>>>()?;

        Ok(Roster::from_persons(persons)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldKind;
    use crate::error::IllegalValueError;

    fn record(name: &str) -> JsonPerson {
        JsonPerson {
            name: Some(name.to_string()),
            nric: Some("S1234567A".to_string()),
            phone: Some("98765432".to_string()),
            email: Some("staff@example.com".to_string()),
            address: Some("1 Main St".to_string()),
            hire: Some("2023-01-01".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_to_model_keeps_order() {
        let doc = JsonRoster {
            persons: vec![record("Zed"), record("Amy")],
        };
        let roster = doc.to_model().unwrap();
        let names: Vec<&str> = roster.persons().iter().map(|p| p.name().as_str()).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(JsonRoster::from_model(&roster).persons.len(), 2);
    }

    #[test]
    fn test_to_model_reports_bad_record_index() {
        let mut bad = record("Bad");
        bad.phone = None;
        let doc = JsonRoster {
            persons: vec![record("Good"), bad],
        };
        match doc.to_model().unwrap_err() {
            StorageError::IllegalValue { index, source } => {
                assert_eq!(index, 1);
                assert_eq!(source, IllegalValueError::MissingField(FieldKind::Phone));
            }
            other => panic!("Expected IllegalValue, got: {:?}", other),
        }
    }

    #[test]
    fn test_to_model_rejects_duplicates() {
        let doc = JsonRoster {
            persons: vec![record("Amy"), record("Amy")],
        };
        assert!(matches!(
            doc.to_model(),
            Err(StorageError::DuplicatePerson(name)) if name.as_str() == "Amy"
        ));
    }

    #[test]
    fn test_empty_document() {
        let doc: JsonRoster = serde_json::from_str("{}").unwrap();
        assert!(doc.to_model().unwrap().is_empty());
    }

    #[test]
    fn test_null_persons_is_empty_document() {
        let doc: JsonRoster = serde_json::from_str(r#"{"persons": null}"#).unwrap();
        assert!(doc.persons.is_empty());
        assert!(doc.to_model().unwrap().is_empty());
    }
}
