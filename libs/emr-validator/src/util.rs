//! Reusable field checks for validators

use crate::{Errors, FieldError, RejectionKind};

/// Message code recorded when a field is longer than its column allows
pub const EXCEEDED_MAX_LENGTH_CODE: &str = "error.exceededMaxLengthOfField";

/// Reject `field` when `value` is missing, empty or only whitespace.
/// Returns `true` when the value has text.
pub fn reject_if_empty_or_whitespace(
    errors: &mut Errors,
    field: &str,
    value: Option<&str>,
    code: &str,
    default_message: &str,
) -> bool {
    let has_text = value.is_some_and(|v| !v.trim().is_empty());
    if !has_text {
        errors.add_field_error(
            FieldError::new(field, RejectionKind::Required, code, default_message)
                .with_rejected_value(value),
        );
    }
    has_text
}

/// Reject every field whose value is longer than its limit, counted in characters.
/// Missing values are never rejected.
pub fn validate_field_lengths(errors: &mut Errors, fields: &[(&str, Option<&str>, usize)]) {
    for &(field, value, max) in fields {
        let Some(value) = value else {
            continue;
        };

        let length = value.chars().count();
        if length > max {
            errors.add_field_error(
                FieldError::new(
                    field,
                    RejectionKind::TooLong,
                    EXCEEDED_MAX_LENGTH_CODE,
                    format!(
                        "Field {} exceeds the maximum length of {} ({} characters)",
                        field, max, length
                    ),
                )
                .with_rejected_value(Some(value)),
            );
        }
    }
}
