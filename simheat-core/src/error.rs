use thiserror::Error;

/// The main result type for simheat-core operations.
pub type SimilarityResult<T> = Result<T, SimilarityError>;

/// Which of the two input sets an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingSet {
    First,
    Second,
}

impl std::fmt::Display for EmbeddingSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingSet::First => write!(f, "set 1"),
            EmbeddingSet::Second => write!(f, "set 2"),
        }
    }
}

/// Enum representing possible errors within the simheat-core library.
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Label count mismatch in {set}: {embeddings} embeddings but {labels} labels")]
    LabelCountMismatch {
        set: EmbeddingSet,
        embeddings: usize,
        labels: usize,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_configuration() {
        let err = SimilarityError::Configuration("threshold must be finite".to_string());
        assert_eq!(format!("{}", err), "Configuration error: threshold must be finite");
    }

    #[test]
    fn test_error_display_dimension_mismatch() {
        let err = SimilarityError::DimensionMismatch { expected: 10, actual: 5 };
        assert_eq!(format!("{}", err), "Vector dimension mismatch: expected 10, got 5");
    }

    #[test]
    fn test_error_display_label_count_mismatch() {
        let err = SimilarityError::LabelCountMismatch {
            set: EmbeddingSet::Second,
            embeddings: 3,
            labels: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Label count mismatch in set 2: 3 embeddings but 2 labels"
        );
    }

    #[test]
    fn test_error_display_invalid_argument() {
        let err = SimilarityError::InvalidArgument("shared mask needs square input".to_string());
        assert_eq!(format!("{}", err), "Invalid argument: shared mask needs square input");
    }
}
