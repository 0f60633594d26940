// Response accuracy: grading answers against a reference answer key.
//
// Independent of the association scorer. Used to compare how accurately a
// model answers the same questions for different respondent groups.

pub mod evaluator;

pub use evaluator::{
    accuracy_gap, compare_groups, evaluate_accuracy, grade, AccuracyError, Answers, Grade,
    GroupGrade, Mismatch,
};
