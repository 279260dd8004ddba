//! ConceptMapType model
//!
//! Reference data describing how a concept relates to a term in another
//! source, e.g. "SAME-AS", "NARROWER-THAN" or "is a".

use super::concept::new_uuid;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A concept map type
///
/// `name` is optional at the type level so that unsaved, incomplete candidates
/// can be handed to a validator; a persisted record always carries one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConceptMapType {
    /// Primary key, assigned on save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept_map_type_id: Option<i32>,

    #[serde(default = "new_uuid")]
    pub uuid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Hidden map types are kept out of pick lists but still usable
    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default)]
    pub retired: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retire_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_retired: Option<DateTime<Utc>>,
}

impl Default for ConceptMapType {
    fn default() -> Self {
        Self::new()
    }
}

impl ConceptMapType {
    pub fn new() -> Self {
        Self {
            concept_map_type_id: None,
            uuid: new_uuid(),
            name: None,
            description: None,
            is_hidden: false,
            retired: false,
            retire_reason: None,
            date_created: None,
            date_retired: None,
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut map_type = Self::new();
        map_type.set_name(name);
        map_type
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn set_retire_reason(&mut self, reason: impl Into<String>) {
        self.retire_reason = Some(reason.into());
    }

    pub fn retire(&mut self, reason: impl Into<String>) {
        self.retired = true;
        self.retire_reason = Some(reason.into());
        self.date_retired = Some(Utc::now());
    }

    pub fn unretire(&mut self) {
        self.retired = false;
        self.retire_reason = None;
        self.date_retired = None;
    }

    pub fn is_active(&self) -> bool {
        !self.retired
    }

    /// Name used for uniqueness checks: trimmed and lowercased.
    /// `None` when the name is missing or blank.
    pub fn normalized_name(&self) -> Option<String> {
        self.name.as_deref().and_then(normalize_name)
    }
}

/// Normalize a map type name for case-insensitive comparison
pub fn normalize_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
