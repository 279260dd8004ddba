use crate::error::Result;
use emr_models::{Concept, ConceptMapType};

/// Read/write access to the concept dictionary
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// failures of the backing store itself.
pub trait ConceptService: Send + Sync {
    fn get_concept(&self, concept_id: i32) -> Result<Option<Concept>>;

    fn get_concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>>;

    fn get_concept_map_type(&self, concept_map_type_id: i32) -> Result<Option<ConceptMapType>>;

    fn get_concept_map_type_by_uuid(&self, uuid: &str) -> Result<Option<ConceptMapType>>;

    /// Look up a map type by name, ignoring case and surrounding whitespace.
    /// Retired map types are included.
    fn get_concept_map_type_by_name(&self, name: &str) -> Result<Option<ConceptMapType>>;

    /// All map types ordered by id, optionally including retired ones
    fn get_all_concept_map_types(&self, include_retired: bool) -> Result<Vec<ConceptMapType>>;

    /// Insert or replace a map type, keyed by uuid. Assigns an id to new records.
    fn save_concept_map_type(&self, map_type: ConceptMapType) -> Result<ConceptMapType>;

    fn get_active_concept_map_types(&self) -> Result<Vec<ConceptMapType>> {
        self.get_all_concept_map_types(false)
    }
}
