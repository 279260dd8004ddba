use crate::editor::{resolve_by_id_or_uuid, PropertyEditor};
use crate::Result;
use emr_api::ConceptService;
use emr_models::Concept;
use std::sync::Arc;

/// Editor for [`Concept`] values, resolved through a [`ConceptService`]
pub struct ConceptEditor {
    service: Arc<dyn ConceptService>,
    value: Option<Concept>,
}

impl ConceptEditor {
    pub fn new(service: Arc<dyn ConceptService>) -> Self {
        Self {
            service,
            value: None,
        }
    }
}

impl PropertyEditor for ConceptEditor {
    type Value = Concept;

    fn set_as_text(&mut self, text: Option<&str>) -> Result<()> {
        let service = self.service.as_ref();
        self.value = resolve_by_id_or_uuid(
            text,
            "concept",
            |id| service.get_concept(id),
            |uuid| service.get_concept_by_uuid(uuid),
        )?;
        Ok(())
    }

    fn as_text(&self) -> String {
        self.value
            .as_ref()
            .map(|c| c.concept_id.to_string())
            .unwrap_or_default()
    }

    fn value(&self) -> Option<&Concept> {
        self.value.as_ref()
    }

    fn set_value(&mut self, value: Option<Concept>) {
        self.value = value;
    }

    fn take_value(&mut self) -> Option<Concept> {
        self.value.take()
    }
}
