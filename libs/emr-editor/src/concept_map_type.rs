use crate::editor::{resolve_by_id_or_uuid, PropertyEditor};
use crate::Result;
use emr_api::ConceptService;
use emr_models::ConceptMapType;
use std::sync::Arc;

/// Editor for [`ConceptMapType`] values
///
/// Unsaved map types have no id, so their text form is empty.
pub struct ConceptMapTypeEditor {
    service: Arc<dyn ConceptService>,
    value: Option<ConceptMapType>,
}

impl ConceptMapTypeEditor {
    pub fn new(service: Arc<dyn ConceptService>) -> Self {
        Self {
            service,
            value: None,
        }
    }
}

impl PropertyEditor for ConceptMapTypeEditor {
    type Value = ConceptMapType;

    fn set_as_text(&mut self, text: Option<&str>) -> Result<()> {
        let service = self.service.as_ref();
        self.value = resolve_by_id_or_uuid(
            text,
            "concept map type",
            |id| service.get_concept_map_type(id),
            |uuid| service.get_concept_map_type_by_uuid(uuid),
        )?;
        Ok(())
    }

    fn as_text(&self) -> String {
        self.value
            .as_ref()
            .and_then(|m| m.concept_map_type_id)
            .map(|id| id.to_string())
            .unwrap_or_default()
    }

    fn value(&self) -> Option<&ConceptMapType> {
        self.value.as_ref()
    }

    fn set_value(&mut self, value: Option<ConceptMapType>) {
        self.value = value;
    }

    fn take_value(&mut self) -> Option<ConceptMapType> {
        self.value.take()
    }
}
