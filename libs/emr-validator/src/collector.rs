//! Error collector populated by validators
//!
//! Mirrors the binding-result model: errors are either attached to a named
//! field of the target object or to the object as a whole. Validators append
//! to the collector and never remove from it.

use serde_json::Value;

/// Accumulated validation errors for one target object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    object_name: String,
    global_errors: Vec<ObjectError>,
    field_errors: Vec<FieldError>,
}

impl Errors {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            global_errors: Vec::new(),
            field_errors: Vec::new(),
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Record an error against the whole object
    pub fn reject(&mut self, code: impl Into<String>, default_message: impl Into<String>) {
        let error = ObjectError {
            code: code.into(),
            default_message: default_message.into(),
        };
        tracing::debug!(
            object = %self.object_name,
            code = %error.code,
            "Rejected object"
        );
        self.global_errors.push(error);
    }

    /// Record an error against a single field
    pub fn reject_value(
        &mut self,
        field: impl Into<String>,
        kind: RejectionKind,
        code: impl Into<String>,
        default_message: impl Into<String>,
    ) {
        self.add_field_error(FieldError::new(field, kind, code, default_message));
    }

    pub fn add_field_error(&mut self, error: FieldError) {
        tracing::debug!(
            object = %self.object_name,
            field = %error.field,
            code = %error.code,
            "Rejected field value"
        );
        self.field_errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.global_errors.is_empty() || !self.field_errors.is_empty()
    }

    pub fn has_global_errors(&self) -> bool {
        !self.global_errors.is_empty()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors.iter().any(|e| e.field == field)
    }

    pub fn error_count(&self) -> usize {
        self.global_errors.len() + self.field_errors.len()
    }

    pub fn global_errors(&self) -> &[ObjectError] {
        &self.global_errors
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn field_errors_for<'a>(
        &'a self,
        field: &'a str,
    ) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.field_errors.iter().filter(move |e| e.field == field)
    }

    /// First error recorded for `field`
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors.iter().find(|e| e.field == field)
    }

    /// Distinct field names with at least one error, in first-rejected order
    pub fn fields_with_errors(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.field_errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "objectName": self.object_name,
            "valid": !self.has_errors(),
            "globalErrors": self.global_errors.iter().map(ObjectError::to_json).collect::<Vec<_>>(),
            "fieldErrors": self.field_errors.iter().map(FieldError::to_json).collect::<Vec<_>>(),
        })
    }
}

/// Error attached to the target object rather than one of its fields
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectError {
    pub code: String,
    pub default_message: String,
}

impl ObjectError {
    fn to_json(&self) -> Value {
        serde_json::json!({
            "code": self.code,
            "message": self.default_message,
        })
    }
}

/// Error attached to a named field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub kind: RejectionKind,
    /// Message code, e.g. `ConceptMapType.error.nameRequired`
    pub code: String,
    pub default_message: String,
    pub rejected_value: Option<String>,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        kind: RejectionKind,
        code: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            kind,
            code: code.into(),
            default_message: default_message.into(),
            rejected_value: None,
        }
    }

    pub fn with_rejected_value(mut self, value: Option<&str>) -> Self {
        self.rejected_value = value.map(str::to_string);
        self
    }

    fn to_json(&self) -> Value {
        let mut error = serde_json::json!({
            "field": self.field,
            "kind": self.kind.to_string(),
            "code": self.code,
            "message": self.default_message,
        });

        if let Some(ref value) = self.rejected_value {
            error["rejectedValue"] = serde_json::json!(value);
        }

        error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    Required,
    Duplicate,
    TooLong,
}

impl std::fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Required => "required",
            Self::Duplicate => "duplicate",
            Self::TooLong => "too-long",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collector_has_no_errors() {
        let errors = Errors::new("mapType");

        assert_eq!(errors.object_name(), "mapType");
        assert!(!errors.has_errors());
        assert!(!errors.has_field_errors("name"));
        assert_eq!(errors.error_count(), 0);
    }

    #[test]
    fn test_field_errors_are_keyed_by_field() {
        let mut errors = Errors::new("mapType");
        errors.reject_value("name", RejectionKind::Required, "nameRequired", "name is required");
        errors.add_field_error(
            FieldError::new("description", RejectionKind::TooLong, "tooLong", "too long")
                .with_rejected_value(Some("xxxx")),
        );
        errors.reject_value("name", RejectionKind::Duplicate, "duplicate", "duplicate name");

        assert!(errors.has_errors());
        assert!(errors.has_field_errors("name"));
        assert!(errors.has_field_errors("description"));
        assert!(!errors.has_field_errors("retireReason"));
        assert!(!errors.has_global_errors());
        assert_eq!(errors.field_errors_for("name").count(), 2);
        assert_eq!(errors.field_error("name").unwrap().kind, RejectionKind::Required);
        assert_eq!(errors.fields_with_errors(), vec!["name", "description"]);
    }

    #[test]
    fn test_global_errors_count_towards_has_errors() {
        let mut errors = Errors::new("mapType");
        errors.reject("error.general", "Something is wrong");

        assert!(errors.has_errors());
        assert!(errors.has_global_errors());
        assert!(errors.field_errors().is_empty());
        assert_eq!(errors.error_count(), 1);
    }

    #[test]
    fn test_json_summary() {
        let mut errors = Errors::new("mapType");
        errors.add_field_error(
            FieldError::new("name", RejectionKind::Duplicate, "ConceptMapType.duplicate.name", "dup")
                .with_rejected_value(Some("is a")),
        );

        let json = errors.to_json();
        assert_eq!(json["objectName"], "mapType");
        assert_eq!(json["valid"], false);
        assert_eq!(json["fieldErrors"][0]["field"], "name");
        assert_eq!(json["fieldErrors"][0]["kind"], "duplicate");
        assert_eq!(json["fieldErrors"][0]["rejectedValue"], "is a");
    }
}
