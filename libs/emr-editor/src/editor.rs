use crate::{EditorError, Result};

/// Converts between a domain object and its request-parameter text
pub trait PropertyEditor {
    type Value;

    /// Resolve `text` and make the result the current value
    fn set_as_text(&mut self, text: Option<&str>) -> Result<()>;

    /// Text form of the current value, empty when there is none
    fn as_text(&self) -> String;

    fn value(&self) -> Option<&Self::Value>;

    fn set_value(&mut self, value: Option<Self::Value>);

    fn take_value(&mut self) -> Option<Self::Value>;
}

/// Lookup shared by the id-backed editors.
///
/// Returns `Ok(None)` for blank text. `kind` names the object in the error message.
pub(crate) fn resolve_by_id_or_uuid<T>(
    text: Option<&str>,
    kind: &str,
    by_id: impl FnOnce(i32) -> emr_api::Result<Option<T>>,
    by_uuid: impl FnOnce(&str) -> emr_api::Result<Option<T>>,
) -> Result<Option<T>> {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    let found = match text.parse::<i32>() {
        Ok(id) => by_id(id)?,
        Err(_) => by_uuid(text)?,
    };

    match found {
        Some(value) => Ok(Some(value)),
        None => {
            tracing::warn!(kind, value = text, "Property editor lookup found nothing");
            Err(EditorError::IllegalArgument(format!(
                "Failed to find {} for value [{}]",
                kind, text
            )))
        }
    }
}
