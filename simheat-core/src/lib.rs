pub mod config;
pub mod error;
pub mod filter;
pub mod similarity;
pub mod table;
pub mod vector;

// Re-export key types for easier use
pub use config::{FilterConfig, MaskMode};
pub use error::{EmbeddingSet, SimilarityError, SimilarityResult};
pub use filter::{similarity_filter, similarity_filter_with, FilteredSimilarity};
pub use similarity::{cosine_similarity, pairwise_cosine_similarity};
pub use table::{SimilarityRecord, SimilarityTable};
pub use vector::{Embedding, Label};
