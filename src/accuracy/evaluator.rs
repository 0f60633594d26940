// Exact-match grading of responses against an answer key.
//
// Matching is byte-for-byte: "Six" does not match "6" and "Shakespeare" does
// not match "William Shakespeare". Responses to questions outside the key are
// ignored.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Question -> answer mapping, used for both the key and the responses.
pub type Answers = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccuracyError {
    /// A question in the answer key has no response.
    #[error("no response for question {question:?}")]
    MissingResponse { question: String },

    /// The answer key has no questions, so accuracy is 0/0.
    #[error("answer key is empty")]
    EmptyAnswerKey,

    /// Grading failed for one of several respondent groups.
    #[error("group {group:?}: {source}")]
    Group {
        group: String,
        #[source]
        source: Box<AccuracyError>,
    },
}

/// A question whose response differs from the key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    pub question: String,
    pub expected: String,
    pub given: String,
}

/// The outcome of grading one set of responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grade {
    pub correct: usize,
    pub total: usize,
    /// `correct / total`, in [0, 1]
    pub accuracy: f64,
    /// In answer-key order
    pub mismatches: Vec<Mismatch>,
}

/// Grade `responses` against `correct_answers`.
///
/// Fails on the first keyed question (in key order) that has no response.
pub fn grade(correct_answers: &Answers, responses: &Answers) -> Result<Grade, AccuracyError> {
    if correct_answers.is_empty() {
        return Err(AccuracyError::EmptyAnswerKey);
    }

    let mut mismatches = Vec::new();
    for (question, expected) in correct_answers {
        let given = responses
            .get(question)
            .ok_or_else(|| AccuracyError::MissingResponse {
                question: question.clone(),
            })?;
        if given != expected {
            mismatches.push(Mismatch {
                question: question.clone(),
                expected: expected.clone(),
                given: given.clone(),
            });
        }
    }

    let total = correct_answers.len();
    let correct = total - mismatches.len();
    Ok(Grade {
        correct,
        total,
        accuracy: correct as f64 / total as f64,
        mismatches,
    })
}

/// Fraction of keyed questions answered exactly right.
pub fn evaluate_accuracy(
    correct_answers: &Answers,
    responses: &Answers,
) -> Result<f64, AccuracyError> {
    grade(correct_answers, responses).map(|g| g.accuracy)
}

/// A named respondent group and its grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupGrade {
    pub group: String,
    pub grade: Grade,
}

/// Grade several respondent groups against one key, preserving input order.
pub fn compare_groups(
    correct_answers: &Answers,
    groups: &[(String, Answers)],
) -> Result<Vec<GroupGrade>, AccuracyError> {
    groups
        .iter()
        .map(|(group, responses)| {
            grade(correct_answers, responses)
                .map(|grade| GroupGrade {
                    group: group.clone(),
                    grade,
                })
                .map_err(|e| AccuracyError::Group {
                    group: group.clone(),
                    source: Box::new(e),
                })
        })
        .collect()
}

/// Spread between the most and least accurate group.
///
/// `None` with fewer than two groups.
pub fn accuracy_gap(grades: &[GroupGrade]) -> Option<f64> {
    if grades.len() < 2 {
        return None;
    }
    let accuracies = grades.iter().map(|g| g.grade.accuracy);
    let max = accuracies.clone().fold(f64::MIN, f64::max);
    let min = accuracies.fold(f64::MAX, f64::min);
    Some(max - min)
}
