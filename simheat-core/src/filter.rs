//! Threshold filtering of a similarity matrix and reshaping into a long-form table.

use ndarray::{Array2, ArrayView2, Axis};
use tracing::{debug, info, warn};

use crate::config::{FilterConfig, MaskMode};
use crate::error::{EmbeddingSet, SimilarityError, SimilarityResult};
use crate::similarity::{fill_diagonal, pairwise_cosine_similarity};
use crate::table::{SimilarityRecord, SimilarityTable};
use crate::vector::{Embedding, Label};

/// Output of [`similarity_filter`] and [`similarity_filter_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredSimilarity {
    /// One record per retained `(row, column)` pair.
    pub table: SimilarityTable,
    /// Retained set-1 labels, in their original order.
    pub labels_1: Vec<Label>,
    /// Retained set-2 labels, in their original order.
    pub labels_2: Vec<Label>,
    /// Indices into the original set 1 of the retained rows.
    pub row_indices: Vec<usize>,
    /// Indices into the original set 2 of the retained columns.
    pub col_indices: Vec<usize>,
    /// The similarity matrix restricted to the retained rows and columns.
    pub matrix: Array2<f32>,
}

impl FilteredSimilarity {
    /// Splits into `(table, labels_1, labels_2)`.
    pub fn into_parts(self) -> (SimilarityTable, Vec<Label>, Vec<Label>) {
        (self.table, self.labels_1, self.labels_2)
    }
}

/// True if `x` lies strictly between `threshold` and 1.
#[inline]
fn is_informative(x: f32, threshold: f32) -> bool {
    x > threshold && x < 1.0
}

/// For each lane along `axis` (rows for `Axis(0)`, columns for `Axis(1)`), whether it
/// contains at least one entry strictly between `threshold` and 1.
pub fn retention_mask(matrix: ArrayView2<f32>, axis: Axis, threshold: f32) -> Vec<bool> {
    matrix
        .axis_iter(axis)
        .map(|lane| lane.iter().any(|&x| is_informative(x, threshold)))
        .collect()
}

fn kept_indices(mask: &[bool]) -> Vec<usize> {
    mask.iter()
        .enumerate()
        .filter_map(|(i, &keep)| keep.then_some(i))
        .collect()
}

fn check_label_count(
    set: EmbeddingSet,
    embeddings: &[Embedding],
    labels: &[Label],
) -> SimilarityResult<()> {
    if embeddings.len() != labels.len() {
        return Err(SimilarityError::LabelCountMismatch {
            set,
            embeddings: embeddings.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}

/// Filters the self-similarity of a set: the diagonal is forced to 1 and rows and
/// columns are dropped together when a row has no entry strictly between
/// `threshold` and 1.
///
/// Both sets must be the same length; the row mask is reused for the columns.
pub fn similarity_filter(
    embeddings_1: &[Embedding],
    embeddings_2: &[Embedding],
    labels_1: &[Label],
    labels_2: &[Label],
    threshold: f32,
) -> SimilarityResult<FilteredSimilarity> {
    similarity_filter_with(
        embeddings_1,
        embeddings_2,
        labels_1,
        labels_2,
        &FilterConfig::self_similarity(threshold),
    )
}

/// Computes pairwise cosine similarity between the two sets and keeps only the
/// rows and columns that hold an informative value, as configured by `config`.
///
/// # Errors
/// * `LabelCountMismatch` if a set's embeddings and labels differ in length.
/// * `DimensionMismatch` if the vectors do not all share one dimensionality.
/// * `InvalidArgument` if `MaskMode::Shared` is used with sets of different length.
/// * `Configuration` if the threshold is not finite.
pub fn similarity_filter_with(
    embeddings_1: &[Embedding],
    embeddings_2: &[Embedding],
    labels_1: &[Label],
    labels_2: &[Label],
    config: &FilterConfig,
) -> SimilarityResult<FilteredSimilarity> {
    config.validate()?;
    check_label_count(EmbeddingSet::First, embeddings_1, labels_1)?;
    check_label_count(EmbeddingSet::Second, embeddings_2, labels_2)?;
    if config.mask == MaskMode::Shared && embeddings_1.len() != embeddings_2.len() {
        return Err(SimilarityError::InvalidArgument(format!(
            "shared row/column mask needs sets of equal length, got {} and {}",
            embeddings_1.len(),
            embeddings_2.len()
        )));
    }

    let mut similarity = pairwise_cosine_similarity(embeddings_1, embeddings_2)?;
    if config.fill_diagonal {
        fill_diagonal(&mut similarity, 1.0);
    }

    let row_mask = retention_mask(similarity.view(), Axis(0), config.threshold);
    let col_mask = match config.mask {
        MaskMode::Shared => row_mask.clone(),
        MaskMode::Independent => retention_mask(similarity.view(), Axis(1), config.threshold),
    };
    let row_indices = kept_indices(&row_mask);
    let col_indices = kept_indices(&col_mask);
    debug!(
        rows = similarity.nrows(),
        cols = similarity.ncols(),
        threshold = config.threshold,
        mask = ?config.mask,
        "Applied retention masks"
    );

    let matrix = Array2::from_shape_fn((row_indices.len(), col_indices.len()), |(i, j)| {
        similarity[[row_indices[i], col_indices[j]]]
    });
    let labels_1: Vec<Label> = row_indices.iter().map(|&i| labels_1[i].clone()).collect();
    let labels_2: Vec<Label> = col_indices.iter().map(|&j| labels_2[j].clone()).collect();

    let mut records = Vec::with_capacity(labels_1.len() * labels_2.len());
    for (i, label_1) in labels_1.iter().enumerate() {
        for (j, label_2) in labels_2.iter().enumerate() {
            records.push(SimilarityRecord {
                label_1: label_1.clone(),
                label_2: label_2.clone(),
                score: matrix[[i, j]],
            });
        }
    }

    if records.is_empty() {
        warn!(threshold = config.threshold, "No similarity pairs survived filtering");
    } else {
        info!(
            kept_rows = row_indices.len(),
            kept_cols = col_indices.len(),
            "Filtered similarity matrix"
        );
    }

    Ok(FilteredSimilarity {
        table: SimilarityTable::new(records),
        labels_1,
        labels_2,
        row_indices,
        col_indices,
        matrix,
    })
}
