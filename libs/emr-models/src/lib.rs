//! Concept dictionary data models
//!
//! Strongly-typed structures for the pieces of the concept dictionary that the
//! editor and validator layers work with.
//!
//! # Module Organization
//!
//! - `concept`: clinical/terminology concepts, referenced by integer id or uuid
//! - `concept_map_type`: reference data describing how concepts relate ("is a", "narrower than")
//! - `dataset`: a serializable bundle of both, used to seed in-memory services
//!
//! # Example
//!
//! ```rust
//! use emr_models::{ConceptMapType, ConceptDataset};
//! use serde_json::json;
//!
//! let dataset: ConceptDataset = serde_json::from_value(json!({
//!     "conceptMapTypes": [
//!         { "conceptMapTypeId": 2, "uuid": "35543629-7d8c-11e1-909d-c80aa9edcf4e", "name": "SAME-AS" }
//!     ]
//! }))
//! .unwrap();
//!
//! let map_type: &ConceptMapType = &dataset.concept_map_types[0];
//! assert_eq!(map_type.name.as_deref(), Some("SAME-AS"));
//! assert!(!map_type.retired);
//! ```

pub mod concept;
pub mod concept_map_type;
pub mod dataset;
pub mod error;

pub use concept::Concept;
pub use concept_map_type::{normalize_name, ConceptMapType};
pub use dataset::ConceptDataset;
pub use error::{Error, Result};
