//! Concept service boundary
//!
//! [`ConceptService`] is what editors and validators call to resolve concepts
//! and concept map types. [`InMemoryConceptService`] implements it over a
//! [`ConceptDataset`](emr_models::ConceptDataset), either loaded from JSON or
//! the bundled standard dataset.

pub mod error;
pub mod loader;
pub mod memory;
pub mod service;

pub use error::{Error, Result};
pub use loader::standard_dataset;
pub use memory::InMemoryConceptService;
pub use service::ConceptService;
