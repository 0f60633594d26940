// Error types for embedding construction and association scoring.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which of the four WEAT word sets a word or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetName {
    /// First target set
    X,
    /// Second target set
    Y,
    /// First attribute set
    A,
    /// Second attribute set
    B,
}

impl SetName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetName::X => "X",
            SetName::Y => "Y",
            SetName::A => "A",
            SetName::B => "B",
        }
    }
}

impl fmt::Display for SetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while scoring associations. Every variant aborts the
/// enclosing computation; no partial statistic is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssociationError {
    /// A referenced word has no embedding.
    #[error("no embedding for word {0:?}")]
    MissingWord(String),

    /// Several referenced words have no embedding (reported by up-front validation).
    #[error("no embedding for {} words: {}", .0.len(), .0.join(", "))]
    MissingWords(Vec<String>),

    /// A word set that is averaged or summed over has no members.
    #[error("word set {0} is empty")]
    EmptySet(SetName),

    /// A zero-norm vector makes cosine similarity undefined.
    #[error("cosine similarity is undefined for a zero-norm vector")]
    DegenerateVector,

    /// Two vectors of different lengths were compared.
    #[error("vector length mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
}

/// Errors raised while building an [`EmbeddingSpace`](super::EmbeddingSpace).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbeddingError {
    /// A vector's length differs from the rest of the space.
    #[error("embedding for {word:?} has {actual} components, expected {expected}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        actual: usize,
    },

    /// A vector with no components.
    #[error("embedding for {0:?} is empty")]
    ZeroDimension(String),

    /// A NaN or infinite component.
    #[error("embedding for {word:?} has a non-finite component at index {index}")]
    NonFinite { word: String, index: usize },
}
