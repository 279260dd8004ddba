use emr_api::{ConceptService, Error, InMemoryConceptService};
use std::io::Write;

#[test]
fn standard_dataset_resolves_concept_three() {
    let service = InMemoryConceptService::standard();

    let concept = service.get_concept(3).unwrap().expect("concept 3 exists");
    assert_eq!(concept.name.as_deref(), Some("COUGH SYRUP"));

    let by_uuid = service
        .get_concept_by_uuid(&concept.uuid)
        .unwrap()
        .expect("lookup by uuid");
    assert_eq!(by_uuid, concept);
}

#[test]
fn standard_dataset_unknown_concept_is_none() {
    let service = InMemoryConceptService::standard();
    assert!(service.get_concept(999_999).unwrap().is_none());
    assert!(service.get_concept_by_uuid("not-a-uuid").unwrap().is_none());
}

#[test]
fn standard_dataset_map_type_names_are_case_insensitive() {
    let service = InMemoryConceptService::standard();

    let is_a = service.get_concept_map_type_by_name("IS A").unwrap().unwrap();
    assert_eq!(is_a.concept_map_type_id, Some(1));

    let same_as = service
        .get_concept_map_type_by_name("same-as")
        .unwrap()
        .unwrap();
    assert_eq!(same_as.uuid, "35543629-7d8c-11e1-909d-c80aa9edcf4e");
}

#[test]
fn standard_dataset_lists_active_and_retired_map_types() {
    let service = InMemoryConceptService::standard();

    let all = service.get_all_concept_map_types(true).unwrap();
    let active = service.get_active_concept_map_types().unwrap();

    assert_eq!(all.len(), 6);
    assert_eq!(active.len(), 5);
    assert!(active.iter().all(|m| !m.retired));
}

#[test]
fn standard_services_do_not_share_writes() {
    let first = InMemoryConceptService::standard();
    let second = InMemoryConceptService::standard();

    first
        .save_concept_map_type(emr_models::ConceptMapType::with_name("REPLACED-BY"))
        .unwrap();

    assert!(first.get_concept_map_type_by_name("replaced-by").unwrap().is_some());
    assert!(second.get_concept_map_type_by_name("replaced-by").unwrap().is_none());
}

#[test]
fn loads_dataset_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "concepts": [{{ "conceptId": 42, "name": "ASPIRIN" }}] }}"#
    )
    .unwrap();

    let service = InMemoryConceptService::from_path(file.path()).unwrap();
    let concept = service.get_concept(42).unwrap().unwrap();
    assert_eq!(concept.name.as_deref(), Some("ASPIRIN"));
}

#[test]
fn missing_dataset_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryConceptService::from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::IoError(_)));
}

#[test]
fn invalid_dataset_is_rejected() {
    let err = InMemoryConceptService::from_json_str(
        r#"{ "concepts": [{ "conceptId": 1 }, { "conceptId": 1 }] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidDataset(_)));
}
