use thiserror::Error;

pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{0}")]
    IllegalArgument(String),

    #[error("concept service error: {0}")]
    Service(#[from] emr_api::Error),
}
