use super::{DESCRIPTION_FIELD, NAME_FIELD, RETIRE_REASON_FIELD};
use crate::util::validate_field_lengths;
use crate::{Errors, FieldLengthsPlan};
use emr_models::ConceptMapType;

pub fn validate_lengths(map_type: &ConceptMapType, plan: &FieldLengthsPlan, errors: &mut Errors) {
    validate_field_lengths(
        errors,
        &[
            (NAME_FIELD, map_type.name.as_deref(), plan.name),
            (DESCRIPTION_FIELD, map_type.description.as_deref(), plan.description),
            (
                RETIRE_REASON_FIELD,
                map_type.retire_reason.as_deref(),
                plan.retire_reason,
            ),
        ],
    );
}
