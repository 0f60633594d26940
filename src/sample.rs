// Built-in reference data: a toy 3-dimensional vocabulary with the
// profession/gender word sets, and a five-question quiz answered by two
// respondent groups. Used by `weat demo` and as fallback input when no
// files are configured.

use crate::accuracy::Answers;
use crate::association::{EmbeddingError, EmbeddingSpace, SetLabels, WeatTest};

/// Group name for the native-speaker responses.
pub const NATIVE_GROUP: &str = "native";
/// Group name for the non-native-speaker responses.
pub const NON_NATIVE_GROUP: &str = "non-native";

const VOCABULARY: [(&str, [f64; 3]); 12] = [
    ("doctor", [0.1, 0.3, 0.5]),
    ("engineer", [0.2, 0.4, 0.2]),
    ("scientist", [0.3, 0.1, 0.4]),
    ("nurse", [0.5, 0.1, 0.3]),
    ("teacher", [0.4, 0.2, 0.1]),
    ("receptionist", [0.3, 0.4, 0.3]),
    ("man", [0.5, 0.5, 0.5]),
    ("male", [0.5, 0.4, 0.5]),
    ("boy", [0.5, 0.5, 0.4]),
    ("woman", [0.5, 0.2, 0.3]),
    ("female", [0.5, 0.3, 0.3]),
    ("girl", [0.5, 0.3, 0.4]),
];

const CAPITAL: &str = "What's the capital of France?";
const PHOTOSYNTHESIS: &str = "Which gas do plants take in during photosynthesis?";
const ROMEO: &str = "Who wrote Romeo and Juliet?";
const WWII: &str = "In which year did World War II end?";
const HEXAGON: &str = "How many sides does a hexagon have?";

/// The reference embedding space (12 words, dimension 3).
pub fn reference_embeddings() -> Result<EmbeddingSpace, EmbeddingError> {
    EmbeddingSpace::from_pairs(VOCABULARY.iter().map(|(w, v)| (*w, v.to_vec())))
}

/// Professions as targets, gendered terms as attributes.
pub fn reference_test() -> WeatTest {
    WeatTest {
        target_x: words(&["doctor", "engineer", "scientist"]),
        target_y: words(&["nurse", "teacher", "receptionist"]),
        attribute_a: words(&["man", "male", "boy"]),
        attribute_b: words(&["woman", "female", "girl"]),
        labels: SetLabels {
            x: Some("Medicine/engineering/science".to_string()),
            y: Some("Nursing/teaching/reception".to_string()),
            a: Some("Male terms".to_string()),
            b: Some("Female terms".to_string()),
        },
    }
}

fn words(ws: &[&str]) -> Vec<String> {
    ws.iter().map(|w| w.to_string()).collect()
}

fn answers(pairs: [(&str, &str); 5]) -> Answers {
    pairs
        .into_iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect()
}

/// The five-question answer key.
pub fn reference_answer_key() -> Answers {
    answers([
        (CAPITAL, "Paris"),
        (PHOTOSYNTHESIS, "Carbon dioxide"),
        (ROMEO, "William Shakespeare"),
        (WWII, "1945"),
        (HEXAGON, "6"),
    ])
}

/// Native-speaker responses: only the hexagon answer is off ("Six").
pub fn native_responses() -> Answers {
    answers([
        (CAPITAL, "Paris"),
        (PHOTOSYNTHESIS, "Carbon dioxide"),
        (ROMEO, "William Shakespeare"),
        (WWII, "1945"),
        (HEXAGON, "Six"),
    ])
}

/// Non-native-speaker responses: the photosynthesis gas and WWII year are off.
pub fn non_native_responses() -> Answers {
    answers([
        (CAPITAL, "Paris"),
        (PHOTOSYNTHESIS, "Oxygen"),
        (ROMEO, "William Shakespeare"),
        (WWII, "1944"),
        (HEXAGON, "6"),
    ])
}

/// Both respondent groups, native first.
pub fn reference_groups() -> Vec<(String, Answers)> {
    vec![
        (NATIVE_GROUP.to_string(), native_responses()),
        (NON_NATIVE_GROUP.to_string(), non_native_responses()),
    ]
}
