// EmbeddingSpace: an immutable word -> vector mapping with one fixed dimension.
//
// Vectors are validated when the space is built, so scoring code can assume
// every vector has the same length and only finite components. A space is
// deserialized straight from a JSON object of `"word": [f64, ...]` pairs.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::error::{AssociationError, EmbeddingError};

/// A read-only mapping from word to embedding vector.
///
/// All vectors share `dimension()` components. Zero vectors are accepted
/// here; they only fail when a similarity is computed against them.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<f64>>")]
pub struct EmbeddingSpace {
    dimension: usize,
    vectors: HashMap<String, Box<[f64]>>,
}

impl EmbeddingSpace {
    /// Build a space from `(word, vector)` pairs.
    ///
    /// The first vector fixes the dimension; every later vector must match it.
    /// A repeated word replaces the earlier vector.
    pub fn from_pairs<I, W>(pairs: I) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (W, Vec<f64>)>,
        W: Into<String>,
    {
        Self::build(pairs, None)
    }

    fn build<I, W>(pairs: I, mut dimension: Option<usize>) -> Result<Self, EmbeddingError>
    where
        I: IntoIterator<Item = (W, Vec<f64>)>,
        W: Into<String>,
    {
        let mut vectors = HashMap::new();

        for (word, vector) in pairs {
            let word = word.into();

            if vector.is_empty() {
                return Err(EmbeddingError::ZeroDimension(word));
            }
            if let Some(index) = vector.iter().position(|v| !v.is_finite()) {
                return Err(EmbeddingError::NonFinite { word, index });
            }

            let expected = *dimension.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    word,
                    expected,
                    actual: vector.len(),
                });
            }

            vectors.insert(word, vector.into_boxed_slice());
        }

        Ok(Self {
            dimension: dimension.unwrap_or(0),
            vectors,
        })
    }

    /// Number of components per vector (0 for an empty space).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of words in the space.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.vectors.get(word).map(|v| &v[..])
    }

    /// Look up a word, failing with `MissingWord` when it has no embedding.
    pub fn lookup(&self, word: &str) -> Result<&[f64], AssociationError> {
        self.get(word)
            .ok_or_else(|| AssociationError::MissingWord(word.to_string()))
    }
}

/// The most common vector length in `map`, ties going to the longer length.
/// Empty vectors are ignored; `None` when no vector has components.
fn majority_dimension(map: &BTreeMap<String, Vec<f64>>) -> Option<usize> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for vector in map.values().filter(|v| !v.is_empty()) {
        *counts.entry(vector.len()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(len, _)| len)
}

/// Deserialized maps are checked against the majority dimension in word
/// order, so a ragged file always blames the same, odd-one-out entry.
impl TryFrom<BTreeMap<String, Vec<f64>>> for EmbeddingSpace {
    type Error = EmbeddingError;

    fn try_from(map: BTreeMap<String, Vec<f64>>) -> Result<Self, Self::Error> {
        let dimension = majority_dimension(&map);
        Self::build(map, dimension)
    }
}
