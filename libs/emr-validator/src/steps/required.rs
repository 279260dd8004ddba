use super::NAME_FIELD;
use crate::util::reject_if_empty_or_whitespace;
use crate::Errors;
use emr_models::ConceptMapType;

pub const NAME_REQUIRED_CODE: &str = "ConceptMapType.error.nameRequired";

/// Returns `false` when `name` is missing or blank
pub fn validate_required(map_type: &ConceptMapType, errors: &mut Errors) -> bool {
    reject_if_empty_or_whitespace(
        errors,
        NAME_FIELD,
        map_type.name.as_deref(),
        NAME_REQUIRED_CODE,
        "The name property is required for a concept map type",
    )
}
