//! Validator configuration
//!
//! [`ValidatorConfig`] is the user-facing, serializable form. It is compiled
//! into a [`ValidationPlan`] once and the plan is reused for every run.

use crate::plan::{FieldLengthsPlan, Step, UniquenessPlan, ValidationPlan};
use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Column width shared by `name`, `description` and `retire_reason`
pub const DEFAULT_MAX_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub field_lengths: FieldLengthsConfig,
    pub uniqueness: UniquenessConfig,
    pub exec: ExecConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLengthsConfig {
    pub name: usize,
    pub description: usize,
    pub retire_reason: usize,
}

impl Default for FieldLengthsConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MAX_LENGTH,
            description: DEFAULT_MAX_LENGTH,
            retire_reason: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniquenessConfig {
    pub enabled: bool,
    pub scope: DuplicateNameScope,
}

impl Default for UniquenessConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scope: DuplicateNameScope::Active,
        }
    }
}

/// Which existing records a new name must not collide with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateNameScope {
    /// Only non-retired map types
    Active,
    /// Retired map types as well
    All,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Stop after the first step that records an error
    pub fail_fast: bool,
}

impl ValidatorConfig {
    pub fn builder() -> ValidatorConfigBuilder {
        ValidatorConfigBuilder::default()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the configuration and build the step list
    pub fn compile(&self) -> Result<ValidationPlan, ConfigError> {
        let lengths = &self.field_lengths;
        for (field, max) in [
            ("name", lengths.name),
            ("description", lengths.description),
            ("retire_reason", lengths.retire_reason),
        ] {
            if max == 0 {
                return Err(ConfigError::ZeroMaxLength { field });
            }
        }

        Ok(self.build_plan())
    }

    pub(crate) fn build_plan(&self) -> ValidationPlan {
        let mut steps = vec![Step::Required];
        if self.uniqueness.enabled {
            steps.push(Step::Uniqueness(UniquenessPlan::from(&self.uniqueness)));
        }
        steps.push(Step::FieldLengths(FieldLengthsPlan::from(&self.field_lengths)));

        ValidationPlan {
            steps,
            fail_fast: self.exec.fail_fast,
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    pub fn max_length(mut self, max: usize) -> Self {
        self.config.field_lengths = FieldLengthsConfig {
            name: max,
            description: max,
            retire_reason: max,
        };
        self
    }

    pub fn name_max_length(mut self, max: usize) -> Self {
        self.config.field_lengths.name = max;
        self
    }

    pub fn description_max_length(mut self, max: usize) -> Self {
        self.config.field_lengths.description = max;
        self
    }

    pub fn retire_reason_max_length(mut self, max: usize) -> Self {
        self.config.field_lengths.retire_reason = max;
        self
    }

    pub fn uniqueness(mut self, enabled: bool) -> Self {
        self.config.uniqueness.enabled = enabled;
        self
    }

    pub fn duplicate_scope(mut self, scope: DuplicateNameScope) -> Self {
        self.config.uniqueness.scope = scope;
        self
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.config.exec.fail_fast = fail_fast;
        self
    }

    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}
