//! Concept model
//!
//! Only the identifying parts of a concept are modelled; names, answers and
//! set members live elsewhere in the dictionary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A clinical/terminology entity in the concept dictionary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    /// Integer primary key
    pub concept_id: i32,

    /// Globally unique identifier
    #[serde(default = "new_uuid")]
    pub uuid: String,

    /// Fully specified name in the default locale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub retired: bool,
}

impl Concept {
    pub fn new(concept_id: i32) -> Self {
        Self {
            concept_id,
            uuid: new_uuid(),
            name: None,
            retired: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self
    }
}

pub(crate) fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_generates_missing_uuid() {
        let concept: Concept = serde_json::from_value(json!({ "conceptId": 3 })).unwrap();

        assert_eq!(concept.concept_id, 3);
        assert_eq!(concept.uuid.len(), 36);
        assert!(concept.name.is_none());
        assert!(!concept.retired);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let concept = Concept::new(5089)
            .with_uuid("c607c80f-1ea9-4da3-bb88-6276ce8868dd")
            .with_name("WEIGHT (KG)");

        let value = serde_json::to_value(&concept).unwrap();
        assert_eq!(value["conceptId"], 5089);
        assert_eq!(value["name"], "WEIGHT (KG)");
        assert_eq!(value["retired"], false);
    }
}
