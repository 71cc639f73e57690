use simheat_core::SimilarityError;
use thiserror::Error;

/// Chart-construction error types.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Invalid plot configuration: {0}")]
    Configuration(String),

    #[error("No similarity pairs survived filtering; the color scale has no bounds")]
    EmptyTable,

    #[error("Similarity error: {0}")]
    Similarity(#[from] SimilarityError), // Automatically convert from core errors

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ChartResult<T> = Result<T, ChartError>;
