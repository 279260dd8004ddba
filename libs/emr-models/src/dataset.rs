//! Serializable bundle of concepts and concept map types

use crate::{Concept, ConceptMapType, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Seed data for an in-memory concept service
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptDataset {
    #[serde(default)]
    pub concepts: Vec<Concept>,

    #[serde(default)]
    pub concept_map_types: Vec<ConceptMapType>,
}

impl ConceptDataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.check_integrity()?;
        Ok(dataset)
    }

    /// Reject datasets with repeated ids or uuids, persisted map types without a
    /// name, and active map types sharing a name.
    pub fn check_integrity(&self) -> Result<()> {
        let mut concept_ids = HashSet::new();
        let mut uuids = HashSet::new();

        for concept in &self.concepts {
            if !concept_ids.insert(concept.concept_id) {
                return Err(Error::DuplicateConceptId(concept.concept_id));
            }
            if !uuids.insert(concept.uuid.as_str()) {
                return Err(Error::DuplicateUuid(concept.uuid.clone()));
            }
        }

        let mut map_type_ids = HashSet::new();
        let mut active_names = HashSet::new();
        for map_type in &self.concept_map_types {
            let Some(id) = map_type.concept_map_type_id else {
                return Err(Error::InvalidDataset(format!(
                    "concept map type {} has no conceptMapTypeId",
                    map_type.uuid
                )));
            };
            if !map_type_ids.insert(id) {
                return Err(Error::DuplicateConceptMapTypeId(id));
            }
            if !uuids.insert(map_type.uuid.as_str()) {
                return Err(Error::DuplicateUuid(map_type.uuid.clone()));
            }
            let Some(name) = map_type.normalized_name() else {
                return Err(Error::InvalidDataset(format!(
                    "concept map type {} has no name",
                    id
                )));
            };
            if map_type.is_active() && !active_names.insert(name) {
                return Err(Error::DuplicateConceptMapTypeName(
                    map_type.name.clone().unwrap_or_default(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset() {
        let dataset = ConceptDataset::from_json_str(
            r#"{
                "concepts": [{ "conceptId": 3, "uuid": "0cbe2ed3-cd5f-4f46-9459-26127c9265ab", "name": "COUGH SYRUP" }],
                "conceptMapTypes": [{ "conceptMapTypeId": 1, "uuid": "35543629-7d8c-11e1-909d-c80aa9edcf4e", "name": "is a" }]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.concepts.len(), 1);
        assert_eq!(dataset.concept_map_types.len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_concept_ids() {
        let err = ConceptDataset::from_json_str(
            r#"{ "concepts": [{ "conceptId": 3 }, { "conceptId": 3 }] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateConceptId(3)));
    }

    #[test]
    fn test_rejects_unnamed_map_type() {
        let err = ConceptDataset::from_json_str(
            r#"{ "conceptMapTypes": [{ "conceptMapTypeId": 7, "name": "  " }] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidDataset(_)));
    }

    #[test]
    fn test_rejects_active_map_types_sharing_a_name() {
        let err = ConceptDataset::from_json_str(
            r#"{ "conceptMapTypes": [
                { "conceptMapTypeId": 1, "name": "foo" },
                { "conceptMapTypeId": 2, "name": " FOO " }
            ] }"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::DuplicateConceptMapTypeName(ref n) if n == " FOO "));
    }

    #[test]
    fn test_retired_map_type_may_share_a_name() {
        let dataset = ConceptDataset::from_json_str(
            r#"{ "conceptMapTypes": [
                { "conceptMapTypeId": 1, "name": "related-to", "retired": true },
                { "conceptMapTypeId": 2, "name": "RELATED-TO" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(dataset.concept_map_types.len(), 2);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ConceptDataset::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::SerializationError(_)));
    }
}
