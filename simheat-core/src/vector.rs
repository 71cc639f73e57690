use ndarray::Array1;
use serde::{Serialize, Deserialize};

/// Type alias for embedding labels. Used as axis categories downstream.
pub type Label = String;

/// A single embedding vector.
/// Uses `ndarray::Array1<f32>` so rows can be stacked into a matrix directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Embedding(pub Array1<f32>);

impl Embedding {
    /// Number of components in the vector.
    pub fn dimensions(&self) -> usize {
        self.0.len()
    }
}

impl std::ops::Deref for Embedding {
    type Target = Array1<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(vec: Vec<f32>) -> Self {
        Embedding(Array1::from(vec))
    }
}

/// Copies a borrowed slice, e.g. a row of a larger buffer.
impl From<&[f32]> for Embedding {
    fn from(slice: &[f32]) -> Self {
        Embedding(Array1::from(slice.to_vec()))
    }
}

impl From<Embedding> for Vec<f32> {
    fn from(embedding: Embedding) -> Self {
        embedding.0.to_vec()
    }
}
