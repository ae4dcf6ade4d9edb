//! Persisted form of a tag.

use crate::domain::{Tag, ValidationError};
use serde::{Deserialize, Serialize};

/// A tag as stored on disk: serialized as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonTag {
    pub tag_name: String,
}

impl JsonTag {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
        }
    }

    pub fn from_model(tag: &Tag) -> Self {
        Self::new(tag.as_str())
    }

    pub fn to_model(&self) -> Result<Tag, ValidationError> {
        Tag::new(self.tag_name.as_str())
    }
}
