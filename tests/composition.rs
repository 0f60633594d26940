// Composition tests: files on disk -> loader -> scorer/evaluator -> JSON.
//
// Everything runs against temporary files; no network or global state.

use std::io::Write;

use weat::accuracy::compare_groups;
use weat::association::{weat_report, AssociationError};
use weat::loader::{load_answers, load_embeddings, load_word_sets, parse_group_arg};
use weat::sample::{reference_embeddings, reference_test};

fn temp_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const REFERENCE_EMBEDDINGS: &str = r#"{
    "doctor": [0.1, 0.3, 0.5],
    "engineer": [0.2, 0.4, 0.2],
    "scientist": [0.3, 0.1, 0.4],
    "nurse": [0.5, 0.1, 0.3],
    "teacher": [0.4, 0.2, 0.1],
    "receptionist": [0.3, 0.4, 0.3],
    "man": [0.5, 0.5, 0.5],
    "male": [0.5, 0.4, 0.5],
    "boy": [0.5, 0.5, 0.4],
    "woman": [0.5, 0.2, 0.3],
    "female": [0.5, 0.3, 0.3],
    "girl": [0.5, 0.3, 0.4]
}"#;

const REFERENCE_SETS: &str = r#"{
    "target_x": ["doctor", "engineer", "scientist"],
    "target_y": ["nurse", "teacher", "receptionist"],
    "attribute_a": ["man", "male", "boy"],
    "attribute_b": ["woman", "female", "girl"],
    "labels": {"a": "Male terms", "b": "Female terms"}
}"#;

// ============================================================
// Chain: embeddings file + sets file -> report
// ============================================================

#[test]
fn files_reproduce_builtin_reference_statistic() {
    let emb_file = temp_json(REFERENCE_EMBEDDINGS);
    let sets_file = temp_json(REFERENCE_SETS);

    let space = load_embeddings(emb_file.path()).unwrap();
    let test = load_word_sets(sets_file.path()).unwrap();
    test.validate(&space).unwrap();
    let from_files = weat_report(&test, &space).unwrap();

    let builtin = weat_report(&reference_test(), &reference_embeddings().unwrap()).unwrap();

    assert!((from_files.statistic - builtin.statistic).abs() < 1e-12);
    assert!((from_files.statistic - 0.2511).abs() < 1e-3);
    assert_eq!(test.labels.label(weat::association::SetName::A), "Male terms");
    assert_eq!(test.labels.label(weat::association::SetName::X), "X");
}

#[test]
fn sets_file_with_unknown_words_reports_all_of_them() {
    let emb_file = temp_json(REFERENCE_EMBEDDINGS);
    let sets_file = temp_json(
        r#"{
            "target_x": ["doctor", "pilot"],
            "target_y": ["nurse"],
            "attribute_a": ["man", "uncle"],
            "attribute_b": ["woman"]
        }"#,
    );

    let space = load_embeddings(emb_file.path()).unwrap();
    let test = load_word_sets(sets_file.path()).unwrap();

    assert_eq!(
        test.validate(&space),
        Err(AssociationError::MissingWords(vec![
            "pilot".to_string(),
            "uncle".to_string()
        ]))
    );
    // The scorer itself stops at the first one it meets.
    assert_eq!(
        weat_report(&test, &space),
        Err(AssociationError::MissingWord("pilot".to_string()))
    );
}

#[test]
fn report_serializes_with_breakdown() {
    let report = weat_report(&reference_test(), &reference_embeddings().unwrap()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["statistic"].as_f64().unwrap() > 0.25);
    let assocs = json["associations"].as_array().unwrap();
    assert_eq!(assocs.len(), 6);
    assert_eq!(assocs[0]["word"], "man");
    assert_eq!(assocs[0]["set"], "A");
    assert_eq!(assocs[5]["set"], "B");
}

// ============================================================
// Chain: key file + group args -> grades
// ============================================================

#[test]
fn group_files_graded_in_argument_order() {
    let key_file = temp_json(r#"{"2+2?": "4", "Capital of Japan?": "Tokyo"}"#);
    let good_file = temp_json(r#"{"2+2?": "4", "Capital of Japan?": "Tokyo"}"#);
    let poor_file = temp_json(r#"{"2+2?": "four", "Capital of Japan?": "Tokyo"}"#);

    let key = load_answers(key_file.path()).unwrap();
    let args = [
        format!("poor={}", poor_file.path().display()),
        format!("good={}", good_file.path().display()),
    ];
    let groups: Vec<_> = args
        .iter()
        .map(|arg| {
            let (name, path) = parse_group_arg(arg).unwrap();
            (name, load_answers(&path).unwrap())
        })
        .collect();

    let grades = compare_groups(&key, &groups).unwrap();
    assert_eq!(grades[0].group, "poor");
    assert!((grades[0].grade.accuracy - 0.5).abs() < 1e-12);
    assert_eq!(grades[1].group, "good");
    assert!((grades[1].grade.accuracy - 1.0).abs() < 1e-12);
}

#[test]
fn malformed_embeddings_file_is_an_error_not_a_panic() {
    let emb_file = temp_json(r#"{"man": [0.5, "tall"]}"#);
    assert!(load_embeddings(emb_file.path()).is_err());
}
