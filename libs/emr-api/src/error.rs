//! Error types for the concept service

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] emr_models::Error),

    #[error("Concept map type requires a name to be saved")]
    UnnamedConceptMapType,

    #[error("Service state lock poisoned")]
    LockPoisoned,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
