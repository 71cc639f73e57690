//! Cosine similarity between vectors and between whole embedding sets.

use ndarray::{Array2, ArrayView1, Axis};
use tracing::debug;

use crate::error::{SimilarityError, SimilarityResult};
use crate::vector::Embedding;

/// Calculates the cosine similarity between two vectors.
///
/// Returns `SimilarityError::DimensionMismatch` if vectors have different lengths.
/// A zero vector has similarity 0 with everything. The result is clamped to
/// `[-1, 1]` to absorb floating point drift.
pub fn cosine_similarity(v1: ArrayView1<f32>, v2: ArrayView1<f32>) -> SimilarityResult<f32> {
    if v1.len() != v2.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: v1.len(),
            actual: v2.len(),
        });
    }

    let dot_product = v1.dot(&v2);
    let norm_v1 = v1.dot(&v1).sqrt();
    let norm_v2 = v2.dot(&v2).sqrt();

    if norm_v1 == 0.0 || norm_v2 == 0.0 {
        Ok(0.0)
    } else {
        Ok((dot_product / (norm_v1 * norm_v2)).clamp(-1.0, 1.0))
    }
}

/// Stacks embeddings into a row-normalised `(n, dimensions)` matrix.
/// Zero rows are left as zeros.
fn normalized_rows(embeddings: &[Embedding], dimensions: usize) -> Array2<f32> {
    let mut matrix = Array2::<f32>::zeros((embeddings.len(), dimensions));
    for (mut row, embedding) in matrix.axis_iter_mut(Axis(0)).zip(embeddings) {
        let norm = embedding.dot(&embedding.0).sqrt();
        if norm > 0.0 {
            row.assign(&embedding.mapv(|x| x / norm));
        }
    }
    matrix
}

/// Returns the shared dimensionality of both sets, or the first mismatch found.
/// `None` means both sets are empty.
fn common_dimensions(set_1: &[Embedding], set_2: &[Embedding]) -> SimilarityResult<Option<usize>> {
    let mut all = set_1.iter().chain(set_2.iter());
    let expected = match all.next() {
        Some(first) => first.dimensions(),
        None => return Ok(None),
    };
    for embedding in all {
        if embedding.dimensions() != expected {
            return Err(SimilarityError::DimensionMismatch {
                expected,
                actual: embedding.dimensions(),
            });
        }
    }
    Ok(Some(expected))
}

/// Computes the `(len(set_1), len(set_2))` matrix of cosine similarities.
///
/// Entry `(i, j)` is the cosine similarity between `set_1[i]` and `set_2[j]`.
/// Every vector in both sets must have the same dimensionality.
pub fn pairwise_cosine_similarity(
    set_1: &[Embedding],
    set_2: &[Embedding],
) -> SimilarityResult<Array2<f32>> {
    let dimensions = match common_dimensions(set_1, set_2)? {
        Some(d) => d,
        None => return Ok(Array2::zeros((0, 0))),
    };
    debug!(rows = set_1.len(), cols = set_2.len(), dimensions, "Computing pairwise cosine similarity");

    let left = normalized_rows(set_1, dimensions);
    let right = normalized_rows(set_2, dimensions);
    let mut similarity = left.dot(&right.t());
    similarity.mapv_inplace(|x| x.clamp(-1.0, 1.0));
    Ok(similarity)
}

/// Overwrites the main diagonal with `value`.
/// On a rectangular matrix only the leading `min(rows, cols)` entries are touched.
pub fn fill_diagonal(matrix: &mut Array2<f32>, value: f32) {
    matrix.diag_mut().fill(value);
}
