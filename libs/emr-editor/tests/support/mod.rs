//! Checks shared by every id-backed editor
//!
//! Each editor test file supplies a factory, an existing object and its text
//! forms, then calls these from individual `#[test]` functions.
#![allow(dead_code)]

use emr_editor::{EditorError, PropertyEditor};
use std::fmt::Debug;

pub fn sets_value_to_none_if_given_none<E: PropertyEditor>(mut editor: E, existing: E::Value) {
    editor.set_value(Some(existing));
    editor.set_as_text(None).unwrap();
    assert!(editor.value().is_none());
}

pub fn sets_value_to_none_if_given_blank_text<E>(mut editor: E, existing: E::Value)
where
    E: PropertyEditor,
    E::Value: Clone,
{
    for text in ["", "   "] {
        editor.set_value(Some(existing.clone()));
        editor.set_as_text(Some(text)).unwrap();
        assert!(editor.value().is_none(), "text {:?}", text);
    }
}

pub fn sets_value_from_text<E>(mut editor: E, text: &str, expected: &E::Value)
where
    E: PropertyEditor,
    E::Value: PartialEq + Debug,
{
    editor.set_as_text(Some(text)).unwrap();
    assert_eq!(editor.value(), Some(expected));
}

pub fn fails_if_text_resolves_to_nothing<E>(mut editor: E, text: &str, existing: E::Value)
where
    E: PropertyEditor,
    E::Value: PartialEq + Debug + Clone,
{
    editor.set_value(Some(existing.clone()));

    let err = editor.set_as_text(Some(text)).unwrap_err();

    assert!(matches!(err, EditorError::IllegalArgument(_)), "{:?}", err);
    assert!(err.to_string().contains(text));
    assert_eq!(editor.value(), Some(&existing), "value must be left untouched");
}

pub fn returns_empty_text_if_value_is_none<E: PropertyEditor>(mut editor: E) {
    editor.set_value(None);
    assert_eq!(editor.as_text(), "");
}

pub fn returns_id_text_if_value_is_set<E: PropertyEditor>(
    mut editor: E,
    existing: E::Value,
    expected_text: &str,
) {
    editor.set_value(Some(existing));
    assert_eq!(editor.as_text(), expected_text);
}

