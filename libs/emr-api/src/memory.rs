use crate::error::{Error, Result};
use crate::service::ConceptService;
use chrono::Utc;
use emr_models::{normalize_name, Concept, ConceptDataset, ConceptMapType};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// A [`ConceptService`] backed by in-process maps
///
/// Seeded from a [`ConceptDataset`]; writes only touch the in-memory copy.
#[derive(Debug)]
pub struct InMemoryConceptService {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    concepts: BTreeMap<i32, Concept>,
    map_types: BTreeMap<i32, ConceptMapType>,
}

impl State {
    fn next_map_type_id(&self) -> i32 {
        self.map_types.keys().next_back().map_or(1, |id| id + 1)
    }
}

impl Default for InMemoryConceptService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryConceptService {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State::default()),
        }
    }

    pub fn from_dataset(dataset: ConceptDataset) -> Result<Self> {
        dataset.check_integrity()?;
        Ok(Self::from_checked_dataset(dataset))
    }

    /// Build from a dataset that already passed [`ConceptDataset::check_integrity`]
    pub(crate) fn from_checked_dataset(dataset: ConceptDataset) -> Self {
        let state = State {
            concepts: dataset
                .concepts
                .into_iter()
                .map(|c| (c.concept_id, c))
                .collect(),
            map_types: dataset
                .concept_map_types
                .into_iter()
                .filter_map(|m| m.concept_map_type_id.map(|id| (id, m)))
                .collect(),
        };

        tracing::debug!(
            concepts = state.concepts.len(),
            concept_map_types = state.map_types.len(),
            "Seeded in-memory concept service"
        );

        Self {
            state: RwLock::new(state),
        }
    }

    /// Add or replace a concept
    pub fn insert_concept(&self, concept: Concept) -> Result<()> {
        let mut state = self.state.write().map_err(|_| Error::LockPoisoned)?;
        state.concepts.insert(concept.concept_id, concept);
        Ok(())
    }
}

impl ConceptService for InMemoryConceptService {
    fn get_concept(&self, concept_id: i32) -> Result<Option<Concept>> {
        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        let found = state.concepts.get(&concept_id).cloned();
        tracing::debug!(concept_id, found = found.is_some(), "Concept lookup by id");
        Ok(found)
    }

    fn get_concept_by_uuid(&self, uuid: &str) -> Result<Option<Concept>> {
        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        let found = state.concepts.values().find(|c| c.uuid == uuid).cloned();
        tracing::debug!(uuid, found = found.is_some(), "Concept lookup by uuid");
        Ok(found)
    }

    fn get_concept_map_type(&self, concept_map_type_id: i32) -> Result<Option<ConceptMapType>> {
        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        Ok(state.map_types.get(&concept_map_type_id).cloned())
    }

    fn get_concept_map_type_by_uuid(&self, uuid: &str) -> Result<Option<ConceptMapType>> {
        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        Ok(state.map_types.values().find(|m| m.uuid == uuid).cloned())
    }

    fn get_concept_map_type_by_name(&self, name: &str) -> Result<Option<ConceptMapType>> {
        let Some(wanted) = normalize_name(name) else {
            return Ok(None);
        };

        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        // Prefer an active record when a retired one shares the name
        let mut matches = state
            .map_types
            .values()
            .filter(|m| m.normalized_name().as_deref() == Some(wanted.as_str()));
        let first = matches.next().cloned();
        let found = if first.as_ref().is_some_and(|m| m.retired) {
            matches.find(|m| m.is_active()).cloned().or(first)
        } else {
            first
        };

        tracing::debug!(name, found = found.is_some(), "Concept map type lookup by name");
        Ok(found)
    }

    fn get_all_concept_map_types(&self, include_retired: bool) -> Result<Vec<ConceptMapType>> {
        let state = self.state.read().map_err(|_| Error::LockPoisoned)?;
        Ok(state
            .map_types
            .values()
            .filter(|m| include_retired || m.is_active())
            .cloned()
            .collect())
    }

    fn save_concept_map_type(&self, mut map_type: ConceptMapType) -> Result<ConceptMapType> {
        if map_type.normalized_name().is_none() {
            return Err(Error::UnnamedConceptMapType);
        }

        let mut state = self.state.write().map_err(|_| Error::LockPoisoned)?;

        let existing_id = state
            .map_types
            .iter()
            .find(|(_, m)| m.uuid == map_type.uuid)
            .map(|(id, _)| *id);

        let id = match (existing_id, map_type.concept_map_type_id) {
            (Some(id), _) => id,
            (None, Some(id)) if !state.map_types.contains_key(&id) => id,
            _ => state.next_map_type_id(),
        };

        map_type.concept_map_type_id = Some(id);
        map_type.date_created.get_or_insert_with(Utc::now);
        state.map_types.insert(id, map_type.clone());

        tracing::info!(
            concept_map_type_id = id,
            uuid = %map_type.uuid,
            created = existing_id.is_none(),
            "Saved concept map type"
        );
        Ok(map_type)
    }
}
