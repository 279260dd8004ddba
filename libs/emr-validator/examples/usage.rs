use emr_api::InMemoryConceptService;
use emr_models::ConceptMapType;
use emr_validator::*;
use std::sync::Arc;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let service = Arc::new(InMemoryConceptService::standard());

    // Example 1: default configuration
    let validator = ConceptMapTypeValidator::new(service.clone());
    let errors = validator.validate_object(&ConceptMapType::with_name("SAME-AS"), "mapType")?;
    println!("Duplicate name: {}", errors.to_json());

    // Example 2: builder pattern
    let strict = ValidatorConfig::builder()
        .duplicate_scope(DuplicateNameScope::All)
        .description_max_length(64)
        .fail_fast(true)
        .build();
    let validator = ConceptMapTypeValidator::from_config(&strict, service.clone())?;
    println!("Strict plan has {} steps", validator.plan().steps.len());

    // Example 3: YAML configuration
    let yaml = r#"
field_lengths:
  name: 50
uniqueness:
  enabled: false
"#;
    let cfg = ValidatorConfig::from_yaml(yaml)?;
    let validator = ConceptMapTypeValidator::from_config(&cfg, service)?;

    let mut candidate = ConceptMapType::with_name("is a");
    candidate.set_description("Accepted because uniqueness is switched off");
    let errors = validator.validate_object(&candidate, "mapType")?;
    println!("Valid without uniqueness: {}", !errors.has_errors());

    // Example 4: contract violation
    let mut errors = Errors::new("mapType");
    match validator.validate(None, &mut errors) {
        Ok(()) => println!("Should not happen"),
        Err(e) => println!("Caught expected error: {}", e),
    }

    Ok(())
}
