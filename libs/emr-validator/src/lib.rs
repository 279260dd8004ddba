//! Field-level validation for concept dictionary reference data
//!
//! A [`Validator`] inspects a candidate and records problems on an [`Errors`]
//! collector keyed by field name. Only contract violations (validating nothing)
//! and service failures are returned as [`ValidationError`].
//!
//! ```rust
//! use std::sync::Arc;
//! use emr_api::InMemoryConceptService;
//! use emr_models::ConceptMapType;
//! use emr_validator::{ConceptMapTypeValidator, Validator};
//!
//! let validator = ConceptMapTypeValidator::new(Arc::new(InMemoryConceptService::standard()));
//!
//! let errors = validator
//!     .validate_object(&ConceptMapType::with_name("is a"), "mapType")
//!     .unwrap();
//! assert!(errors.has_field_errors("name"));
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod plan;
pub mod steps;
pub mod util;
pub mod validator;

pub use collector::{Errors, FieldError, ObjectError, RejectionKind};
pub use config::{
    DuplicateNameScope, ExecConfig, FieldLengthsConfig, UniquenessConfig, ValidatorConfig,
    ValidatorConfigBuilder, DEFAULT_MAX_LENGTH,
};
pub use error::{ConfigError, Result, ValidationError};
pub use plan::{FieldLengthsPlan, Step, UniquenessPlan, ValidationPlan};
pub use steps::required::NAME_REQUIRED_CODE;
pub use steps::uniqueness::DUPLICATE_NAME_CODE;
pub use util::EXCEEDED_MAX_LENGTH_CODE;
pub use validator::{ConceptMapTypeValidator, Validator};
