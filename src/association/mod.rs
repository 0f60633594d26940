// Word Embedding Association Test (WEAT).
//
// Measures how much more strongly one attribute word set (A) leans toward
// target set X than target set Y, compared with a second attribute set (B).
// Everything here is pure: the embedding space is read, never mutated, and
// every failure is a typed error rather than a NaN.

pub mod embeddings;
pub mod error;
pub mod similarity;
pub mod weat;

pub use embeddings::EmbeddingSpace;
pub use error::{AssociationError, EmbeddingError, SetName};
pub use similarity::cosine_similarity;
pub use weat::{
    differential_association, weat_report, weat_statistic, SetLabels, WeatReport, WeatTest,
    WordAssociation,
};
