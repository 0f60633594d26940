// The WEAT statistic and its per-word differential association.
//
//   s(w, X, Y) = mean_{x in X} cos(w, x) - mean_{y in Y} cos(w, y)
//   statistic  = sum_{a in A} s(a, X, Y) - sum_{b in B} s(b, X, Y)
//
// The statistic is a plain sum over A and B, so its magnitude grows with the
// size of the attribute sets. It is not the normalized effect size.

use serde::{Deserialize, Serialize};

use super::embeddings::EmbeddingSpace;
use super::error::{AssociationError, SetName};
use super::similarity::cosine_similarity;

type Result<T> = std::result::Result<T, AssociationError>;

/// Differential association of `word` with target sets `x` and `y`.
///
/// Both sets must be non-empty, and `word` plus every member of `x` and `y`
/// must be in `embeddings`.
pub fn differential_association<S: AsRef<str>>(
    word: &str,
    x: &[S],
    y: &[S],
    embeddings: &EmbeddingSpace,
) -> Result<f64> {
    require_non_empty(x, SetName::X)?;
    require_non_empty(y, SetName::Y)?;

    let target = embeddings.lookup(word)?;
    Ok(mean_similarity(target, x, embeddings)? - mean_similarity(target, y, embeddings)?)
}

/// The WEAT statistic for targets `x`, `y` and attributes `a`, `b`.
///
/// Fail-fast: the first missing word, empty set or degenerate vector aborts
/// the computation.
pub fn weat_statistic<S: AsRef<str>>(
    x: &[S],
    y: &[S],
    a: &[S],
    b: &[S],
    embeddings: &EmbeddingSpace,
) -> Result<f64> {
    require_non_empty(x, SetName::X)?;
    require_non_empty(y, SetName::Y)?;
    require_non_empty(a, SetName::A)?;
    require_non_empty(b, SetName::B)?;

    let sum_a = attribute_sum(a, x, y, embeddings)?;
    let sum_b = attribute_sum(b, x, y, embeddings)?;
    Ok(sum_a - sum_b)
}

fn require_non_empty<S>(set: &[S], name: SetName) -> Result<()> {
    if set.is_empty() {
        Err(AssociationError::EmptySet(name))
    } else {
        Ok(())
    }
}

fn mean_similarity<S: AsRef<str>>(
    target: &[f64],
    set: &[S],
    embeddings: &EmbeddingSpace,
) -> Result<f64> {
    let total: f64 = set
        .iter()
        .map(|w| cosine_similarity(target, embeddings.lookup(w.as_ref())?))
        .sum::<Result<f64>>()?;
    Ok(total / set.len() as f64)
}

fn attribute_sum<S: AsRef<str>>(
    attributes: &[S],
    x: &[S],
    y: &[S],
    embeddings: &EmbeddingSpace,
) -> Result<f64> {
    attributes
        .iter()
        .map(|w| differential_association(w.as_ref(), x, y, embeddings))
        .sum()
}

/// Optional human-readable names for the four word sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetLabels {
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub a: Option<String>,
    #[serde(default)]
    pub b: Option<String>,
}

impl SetLabels {
    /// The label for `set`, or the bare set name when none was given.
    pub fn label(&self, set: SetName) -> &str {
        let label = match set {
            SetName::X => &self.x,
            SetName::Y => &self.y,
            SetName::A => &self.a,
            SetName::B => &self.b,
        };
        label.as_deref().unwrap_or(set.as_str())
    }
}

/// The four word sets of one association test, as loaded from a sets file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatTest {
    pub target_x: Vec<String>,
    pub target_y: Vec<String>,
    pub attribute_a: Vec<String>,
    pub attribute_b: Vec<String>,
    #[serde(default)]
    pub labels: SetLabels,
}

impl WeatTest {
    pub fn set(&self, name: SetName) -> &[String] {
        match name {
            SetName::X => &self.target_x,
            SetName::Y => &self.target_y,
            SetName::A => &self.attribute_a,
            SetName::B => &self.attribute_b,
        }
    }

    /// Compute the statistic for this test.
    pub fn statistic(&self, embeddings: &EmbeddingSpace) -> Result<f64> {
        weat_statistic(
            &self.target_x,
            &self.target_y,
            &self.attribute_a,
            &self.attribute_b,
            embeddings,
        )
    }

    /// Check every set up front, reporting all missing words at once.
    ///
    /// Empty sets are reported first (X, Y, A, B order). Missing words are
    /// listed once each, in the order they first appear.
    pub fn validate(&self, embeddings: &EmbeddingSpace) -> Result<()> {
        for name in [SetName::X, SetName::Y, SetName::A, SetName::B] {
            require_non_empty(self.set(name), name)?;
        }

        let mut missing: Vec<String> = Vec::new();
        for name in [SetName::X, SetName::Y, SetName::A, SetName::B] {
            for word in self.set(name) {
                if !embeddings.contains(word) && !missing.contains(word) {
                    missing.push(word.clone());
                }
            }
        }

        match missing.len() {
            0 => Ok(()),
            1 => Err(AssociationError::MissingWord(missing.remove(0))),
            _ => Err(AssociationError::MissingWords(missing)),
        }
    }
}

/// Differential association of a single attribute word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordAssociation {
    pub word: String,
    /// The attribute set the word belongs to (A or B)
    pub set: SetName,
    pub score: f64,
}

/// The statistic together with the per-word scores it was summed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatReport {
    pub statistic: f64,
    pub sum_a: f64,
    pub sum_b: f64,
    /// A's words first, then B's, each in input order
    pub associations: Vec<WordAssociation>,
}

/// Compute the statistic for `test` and keep the per-word breakdown.
///
/// Sums are accumulated in the same order as [`weat_statistic`], so the
/// reported statistic matches it exactly.
pub fn weat_report(test: &WeatTest, embeddings: &EmbeddingSpace) -> Result<WeatReport> {
    for name in [SetName::X, SetName::Y, SetName::A, SetName::B] {
        require_non_empty(test.set(name), name)?;
    }

    let mut associations =
        Vec::with_capacity(test.attribute_a.len() + test.attribute_b.len());
    for set in [SetName::A, SetName::B] {
        for word in test.set(set) {
            let score =
                differential_association(word, &test.target_x, &test.target_y, embeddings)?;
            associations.push(WordAssociation {
                word: word.clone(),
                set,
                score,
            });
        }
    }

    let sum_of = |set: SetName| -> f64 {
        associations
            .iter()
            .filter(|w| w.set == set)
            .map(|w| w.score)
            .sum()
    };
    let sum_a = sum_of(SetName::A);
    let sum_b = sum_of(SetName::B);

    Ok(WeatReport {
        statistic: sum_a - sum_b,
        sum_a,
        sum_b,
        associations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> EmbeddingSpace {
        EmbeddingSpace::from_pairs([
            ("east", vec![1.0, 0.0]),
            ("west", vec![0.0, 1.0]),
            ("northeast", vec![1.0, 1.0]),
            ("nearly_east", vec![1.0, 0.1]),
            ("nearly_west", vec![0.1, 1.0]),
            ("void", vec![0.0, 0.0]),
        ])
        .unwrap()
    }

    #[test]
    fn test_differential_association_known_value() {
        // cos(east, east) = 1, cos(east, west) = 0
        let s = differential_association("east", &["east"], &["west"], &space()).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_differential_association_balanced_word_is_zero() {
        let s = differential_association("northeast", &["east"], &["west"], &space()).unwrap();
        assert!(s.abs() < 1e-12);
    }

    #[test]
    fn test_differential_association_uses_arithmetic_mean() {
        // mean(cos(east, east), cos(east, west)) = 0.5; cos(east, west) = 0
        let s = differential_association("east", &["east", "west"], &["west"], &space()).unwrap();
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_x_checked_before_lookup() {
        let empty: [&str; 0] = [];
        let err = differential_association("unknown", &empty, &["west"], &space()).unwrap_err();
        assert_eq!(err, AssociationError::EmptySet(SetName::X));
    }

    #[test]
    fn test_missing_target_word() {
        let err = differential_association("south", &["east"], &["west"], &space()).unwrap_err();
        assert_eq!(err, AssociationError::MissingWord("south".to_string()));
    }

    #[test]
    fn test_zero_vector_in_set_is_degenerate() {
        let err = differential_association("east", &["void"], &["west"], &space()).unwrap_err();
        assert_eq!(err, AssociationError::DegenerateVector);
    }

    #[test]
    fn test_statistic_sums_rather_than_averages() {
        let e = space();
        let one = weat_statistic(&["east"], &["west"], &["nearly_east"], &["nearly_west"], &e)
            .unwrap();
        let doubled = weat_statistic(
            &["east"],
            &["west"],
            &["nearly_east", "nearly_east"],
            &["nearly_west", "nearly_west"],
            &e,
        )
        .unwrap();
        assert!(one > 0.0);
        assert!((doubled - 2.0 * one).abs() < 1e-12);
    }

    #[test]
    fn test_statistic_rejects_empty_attribute_set() {
        let empty: [&str; 0] = [];
        let err = weat_statistic(&["east"], &["west"], &["east"], &empty, &space()).unwrap_err();
        assert_eq!(err, AssociationError::EmptySet(SetName::B));
    }

    #[test]
    fn test_report_matches_statistic() {
        let test = WeatTest {
            target_x: vec!["east".into()],
            target_y: vec!["west".into()],
            attribute_a: vec!["nearly_east".into(), "northeast".into()],
            attribute_b: vec!["nearly_west".into()],
            labels: SetLabels::default(),
        };
        let e = space();
        let report = weat_report(&test, &e).unwrap();
        assert_eq!(report.statistic, test.statistic(&e).unwrap());
        assert_eq!(report.associations.len(), 3);
        assert_eq!(report.associations[2].set, SetName::B);
        assert!((report.statistic - (report.sum_a - report.sum_b)).abs() < 1e-15);
    }

    #[test]
    fn test_validate_collects_all_missing_words() {
        let test = WeatTest {
            target_x: vec!["east".into(), "south".into()],
            target_y: vec!["west".into()],
            attribute_a: vec!["up".into(), "south".into()],
            attribute_b: vec!["east".into()],
            labels: SetLabels::default(),
        };
        assert_eq!(
            test.validate(&space()),
            Err(AssociationError::MissingWords(vec![
                "south".to_string(),
                "up".to_string()
            ]))
        );
    }

    #[test]
    fn test_validate_single_missing_word() {
        let test = WeatTest {
            target_x: vec!["east".into()],
            target_y: vec!["west".into()],
            attribute_a: vec!["up".into()],
            attribute_b: vec!["east".into()],
            labels: SetLabels::default(),
        };
        assert_eq!(
            test.validate(&space()),
            Err(AssociationError::MissingWord("up".to_string()))
        );
    }

    #[test]
    fn test_labels_fall_back_to_set_name() {
        let labels = SetLabels {
            x: Some("Compass east".into()),
            ..SetLabels::default()
        };
        assert_eq!(labels.label(SetName::X), "Compass east");
        assert_eq!(labels.label(SetName::Y), "Y");
    }
}
