use serde::{Serialize, Deserialize};
use crate::error::{SimilarityResult, SimilarityError};

/// How the column retention mask is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskMode {
    /// Reuse the row mask for columns. Only meaningful when both sets hold the
    /// same entities in the same order, so the sets must be the same length.
    Shared,
    /// Test every column on its own, the same way rows are tested.
    Independent,
}

/// Parameters controlling how a similarity matrix is filtered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// A row (or column) survives if it has an entry strictly between this value and 1.
    pub threshold: f32,
    /// Overwrite the main diagonal with 1 before filtering.
    pub fill_diagonal: bool,
    pub mask: MaskMode,
}

impl FilterConfig {
    /// General two-set configuration with the given threshold.
    pub fn new(threshold: f32) -> Self {
        FilterConfig {
            threshold,
            ..Default::default()
        }
    }

    /// Configuration for comparing a set against itself: the diagonal is forced
    /// to 1 and the row mask doubles as the column mask.
    pub fn self_similarity(threshold: f32) -> Self {
        FilterConfig {
            threshold,
            fill_diagonal: true,
            mask: MaskMode::Shared,
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> SimilarityResult<()> {
        if !self.threshold.is_finite() {
            return Err(SimilarityError::Configuration(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            threshold: 0.0,
            fill_diagonal: false,
            mask: MaskMode::Independent,
        }
    }
}
