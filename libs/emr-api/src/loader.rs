use crate::error::Result;
use crate::memory::InMemoryConceptService;
use emr_models::ConceptDataset;
use once_cell::sync::Lazy;
use std::path::Path;

static STANDARD_DATASET: Lazy<ConceptDataset> = Lazy::new(|| {
    ConceptDataset::from_json_str(include_str!("../data/standard_dataset.json"))
        .expect("failed to load embedded standard_dataset.json")
});

/// The dataset bundled with this crate: a handful of concepts (including id 3)
/// and the standard map types ("is a", "SAME-AS", "NARROWER-THAN", ...).
pub fn standard_dataset() -> &'static ConceptDataset {
    &STANDARD_DATASET
}

impl InMemoryConceptService {
    /// Service seeded with a fresh copy of [`standard_dataset`]
    pub fn standard() -> Self {
        Self::from_checked_dataset(standard_dataset().clone())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_dataset(ConceptDataset::from_json_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading concept dataset");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
