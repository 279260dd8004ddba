use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("maximum length for '{field}' must be greater than zero")]
    ZeroMaxLength { field: &'static str },

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures that abort a validation run instead of being recorded on [`Errors`](crate::Errors)
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The caller broke the validator's contract, e.g. passed no target
    #[error("illegal argument: {0}")]
    IllegalArgument(String),

    #[error("concept service error: {0}")]
    Service(#[from] emr_api::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
