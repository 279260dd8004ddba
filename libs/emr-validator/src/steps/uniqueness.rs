//! Name uniqueness against the concept service
//!
//! Names are compared trimmed and case-insensitively. Every stored map type in
//! scope is checked, so a record sharing the candidate's uuid (the record being
//! edited) never hides another record with the same name.

use super::NAME_FIELD;
use crate::{DuplicateNameScope, Errors, FieldError, RejectionKind, Result, UniquenessPlan};
use emr_api::ConceptService;
use emr_models::{normalize_name, ConceptMapType};

pub const DUPLICATE_NAME_CODE: &str = "ConceptMapType.duplicate.name";

pub fn validate_uniqueness(
    map_type: &ConceptMapType,
    plan: &UniquenessPlan,
    service: &dyn ConceptService,
    errors: &mut Errors,
) -> Result<()> {
    let Some(name) = map_type.name.as_deref().map(str::trim) else {
        return Ok(());
    };
    let Some(wanted) = normalize_name(name) else {
        return Ok(());
    };

    let include_retired = plan.scope == DuplicateNameScope::All;
    let duplicate = service
        .get_all_concept_map_types(include_retired)?
        .into_iter()
        .filter(|m| m.uuid != map_type.uuid)
        .find(|m| m.normalized_name().as_deref() == Some(wanted.as_str()));

    let Some(existing) = duplicate else {
        return Ok(());
    };

    tracing::debug!(
        name,
        existing = %existing.uuid,
        retired = existing.retired,
        "Name already used by another concept map type"
    );

    errors.add_field_error(
        FieldError::new(
            NAME_FIELD,
            RejectionKind::Duplicate,
            DUPLICATE_NAME_CODE,
            format!("Duplicate concept map type name: {}", name),
        )
        .with_rejected_value(map_type.name.as_deref()),
    );

    Ok(())
}
