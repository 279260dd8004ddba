mod support;

use emr_api::{ConceptService, InMemoryConceptService};
use emr_editor::{ConceptMapTypeEditor, PropertyEditor};
use emr_models::ConceptMapType;
use std::sync::Arc;

const EXISTING_ID: i32 = 2;

fn service() -> Arc<InMemoryConceptService> {
    Arc::new(InMemoryConceptService::standard())
}

fn new_editor() -> ConceptMapTypeEditor {
    ConceptMapTypeEditor::new(service())
}

fn existing_object() -> ConceptMapType {
    service()
        .get_concept_map_type(EXISTING_ID)
        .unwrap()
        .expect("standard dataset contains map type 2")
}

#[test]
fn sets_value_to_none_if_given_none() {
    support::sets_value_to_none_if_given_none(new_editor(), existing_object());
}

#[test]
fn sets_value_to_none_if_given_empty_string() {
    support::sets_value_to_none_if_given_blank_text(new_editor(), existing_object());
}

#[test]
fn sets_value_to_the_object_associated_with_given_id() {
    support::sets_value_from_text(new_editor(), "2", &existing_object());
}

#[test]
fn sets_value_to_the_object_associated_with_given_uuid() {
    support::sets_value_from_text(
        new_editor(),
        "35543629-7d8c-11e1-909d-c80aa9edcf4e",
        &existing_object(),
    );
}

#[test]
fn fails_if_given_id_does_not_exist() {
    support::fails_if_text_resolves_to_nothing(new_editor(), "404", existing_object());
}

#[test]
fn fails_if_given_uuid_does_not_exist() {
    support::fails_if_text_resolves_to_nothing(new_editor(), "no-such-uuid", existing_object());
}

#[test]
fn returns_empty_string_if_value_is_none() {
    support::returns_empty_text_if_value_is_none(new_editor());
}

#[test]
fn returns_object_id_if_value_is_set() {
    support::returns_id_text_if_value_is_set(new_editor(), existing_object(), "2");
}

#[test]
fn returns_empty_string_for_unsaved_map_type() {
    support::returns_id_text_if_value_is_set(
        new_editor(),
        ConceptMapType::with_name("unsaved"),
        "",
    );
}
