//! Long-form similarity table: one record per retained pair.

use serde::{Serialize, Deserialize};

use crate::vector::Label;

/// A single `(label_1, label_2, score)` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRecord {
    pub label_1: Label,
    pub label_2: Label,
    pub score: f32,
}

/// Plotting-friendly reshaping of a filtered similarity matrix.
/// Records are row-major: every pair for row `i` precedes those for row `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityTable {
    records: Vec<SimilarityRecord>,
}

impl SimilarityTable {
    pub fn new(records: Vec<SimilarityRecord>) -> Self {
        SimilarityTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimilarityRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[SimilarityRecord] {
        &self.records
    }

    /// Score of the first record matching the label pair.
    pub fn get(&self, label_1: &str, label_2: &str) -> Option<f32> {
        self.records
            .iter()
            .find(|r| r.label_1 == label_1 && r.label_2 == label_2)
            .map(|r| r.score)
    }

    /// Smallest score, or `None` for an empty table.
    pub fn min_score(&self) -> Option<f32> {
        self.records.iter().map(|r| r.score).reduce(f32::min)
    }

    /// Largest score, or `None` for an empty table.
    pub fn max_score(&self) -> Option<f32> {
        self.records.iter().map(|r| r.score).reduce(f32::max)
    }

    /// `(min, max)` of the scores, or `None` for an empty table.
    pub fn score_range(&self) -> Option<(f32, f32)> {
        Some((self.min_score()?, self.max_score()?))
    }
}

impl<'a> IntoIterator for &'a SimilarityTable {
    type Item = &'a SimilarityRecord;
    type IntoIter = std::slice::Iter<'a, SimilarityRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
