//! Individual checks run by [`ConceptMapTypeValidator`](crate::ConceptMapTypeValidator)

pub mod lengths;
pub mod required;
pub mod uniqueness;

/// Field names as they appear on the error collector
pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";
pub const RETIRE_REASON_FIELD: &str = "retireReason";
