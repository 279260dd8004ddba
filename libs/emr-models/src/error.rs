//! Error types for concept dictionary models

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Duplicate concept id: {0}")]
    DuplicateConceptId(i32),

    #[error("Duplicate concept map type id: {0}")]
    DuplicateConceptMapTypeId(i32),

    #[error("Duplicate active concept map type name: {0}")]
    DuplicateConceptMapTypeName(String),

    #[error("Duplicate uuid: {0}")]
    DuplicateUuid(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
