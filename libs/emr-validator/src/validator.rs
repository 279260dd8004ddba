use crate::steps::{lengths, required, uniqueness};
use crate::{ConfigError, Errors, Result, Step, ValidationError, ValidationPlan, ValidatorConfig};
use emr_api::ConceptService;
use emr_models::ConceptMapType;
use std::sync::Arc;

/// Inspects a candidate object and records field-level problems on an [`Errors`]
///
/// Ordinary invalid input is never an `Err`: it ends up on the collector.
/// `Err` means the call itself was wrong (no target) or a collaborator failed.
pub trait Validator {
    type Target;

    fn validate(&self, target: Option<&Self::Target>, errors: &mut Errors) -> Result<()>;

    /// Validate into a fresh collector named `object_name`
    fn validate_object(&self, target: &Self::Target, object_name: &str) -> Result<Errors> {
        let mut errors = Errors::new(object_name);
        self.validate(Some(target), &mut errors)?;
        Ok(errors)
    }
}

/// Validates [`ConceptMapType`] candidates before they are saved
///
/// - `name` must be present and not blank; when it is not, no other check runs
/// - `name` must not match another map type's name (see [`DuplicateNameScope`](crate::DuplicateNameScope))
/// - `name`, `description` and `retireReason` must fit their maximum lengths
pub struct ConceptMapTypeValidator {
    plan: ValidationPlan,
    service: Arc<dyn ConceptService>,
}

impl ConceptMapTypeValidator {
    /// Validator with the default configuration
    pub fn new(service: Arc<dyn ConceptService>) -> Self {
        Self::with_plan(ValidationPlan::default(), service)
    }

    pub fn with_plan(plan: ValidationPlan, service: Arc<dyn ConceptService>) -> Self {
        Self { plan, service }
    }

    pub fn from_config(
        config: &ValidatorConfig,
        service: Arc<dyn ConceptService>,
    ) -> std::result::Result<Self, ConfigError> {
        let plan = config.compile()?;
        Ok(Self::with_plan(plan, service))
    }

    pub fn plan(&self) -> &ValidationPlan {
        &self.plan
    }
}

impl Validator for ConceptMapTypeValidator {
    type Target = ConceptMapType;

    fn validate(&self, target: Option<&ConceptMapType>, errors: &mut Errors) -> Result<()> {
        let Some(map_type) = target else {
            return Err(ValidationError::IllegalArgument(
                "the concept map type to validate must not be null".to_string(),
            ));
        };

        ValidationRun::new(&self.plan, self.service.as_ref(), map_type, errors).execute()
    }
}

/// Short-lived validation execution
struct ValidationRun<'a> {
    plan: &'a ValidationPlan,
    service: &'a dyn ConceptService,
    map_type: &'a ConceptMapType,
    errors: &'a mut Errors,
}

impl<'a> ValidationRun<'a> {
    fn new(
        plan: &'a ValidationPlan,
        service: &'a dyn ConceptService,
        map_type: &'a ConceptMapType,
        errors: &'a mut Errors,
    ) -> Self {
        Self {
            plan,
            service,
            map_type,
            errors,
        }
    }

    fn execute(self) -> Result<()> {
        let span = tracing::debug_span!(
            "validate_concept_map_type",
            object = %self.errors.object_name(),
            uuid = %self.map_type.uuid
        );
        let _enter = span.enter();

        let errors_before = self.errors.error_count();

        for step in &self.plan.steps {
            if self.plan.fail_fast && self.errors.error_count() > errors_before {
                break;
            }

            match step {
                Step::Required => {
                    if !required::validate_required(self.map_type, self.errors) {
                        break;
                    }
                }
                Step::Uniqueness(plan) => {
                    uniqueness::validate_uniqueness(self.map_type, plan, self.service, self.errors)?
                }
                Step::FieldLengths(plan) => lengths::validate_lengths(self.map_type, plan, self.errors),
            }
        }

        tracing::debug!(
            recorded = self.errors.error_count() - errors_before,
            "Concept map type validation finished"
        );
        Ok(())
    }
}
