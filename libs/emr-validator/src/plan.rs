use crate::{DuplicateNameScope, FieldLengthsConfig, UniquenessConfig};

/// Compiled validation plan - list of steps to execute
#[derive(Debug, Clone)]
pub struct ValidationPlan {
    pub steps: Vec<Step>,
    pub fail_fast: bool,
}

impl Default for ValidationPlan {
    fn default() -> Self {
        crate::ValidatorConfig::default().build_plan()
    }
}

#[derive(Debug, Clone)]
pub enum Step {
    /// `name` must be present and not blank. A failure ends the run.
    Required,
    Uniqueness(UniquenessPlan),
    FieldLengths(FieldLengthsPlan),
}

// ============================================================================
// Step Plans
// ============================================================================

#[derive(Debug, Clone)]
pub struct UniquenessPlan {
    pub scope: DuplicateNameScope,
}

impl From<&UniquenessConfig> for UniquenessPlan {
    fn from(cfg: &UniquenessConfig) -> Self {
        Self { scope: cfg.scope }
    }
}

#[derive(Debug, Clone)]
pub struct FieldLengthsPlan {
    pub name: usize,
    pub description: usize,
    pub retire_reason: usize,
}

impl From<&FieldLengthsConfig> for FieldLengthsPlan {
    fn from(cfg: &FieldLengthsConfig) -> Self {
        Self {
            name: cfg.name,
            description: cfg.description,
            retire_reason: cfg.retire_reason,
        }
    }
}
