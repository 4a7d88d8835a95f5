use std::fs;

use serde_json::Value;
use vocab_core::error::CleanError;

use crate::run;

const MESSY_DATASET: &str = r#"[
    {"id": 1, "word": "Cat", "cefr_level": "B1", "translation": "猫/动物", "phonetic": "kæt"},
    {"id": 2, "word": "cat ", "cefr_level": "A1", "translation": "猫"},
    {"id": 3, "word": "dog", "cefr_level": "A2", "translation": "狗 犬", "phonetic": "dɒɡ"},
    {"id": 4, "word": "library", "cefr_level": "B2", "translation": "图书馆；藏书", "examples": ["a public library"]}
]"#;

#[test]
fn missing_file_is_reported_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");

    let err = run(&path).unwrap_err();
    assert!(matches!(err, CleanError::NotFound { .. }));

    // Nothing may be written for a missing input.
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn cleaning_rewrites_the_file_deduplicated_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    fs::write(&path, MESSY_DATASET).unwrap();

    let report = run(&path).unwrap();
    assert_eq!(report.original, 4);
    assert_eq!(report.unique, 3);

    let written = fs::read_to_string(&path).unwrap();
    let entries: Vec<Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(entries.len(), 3);

    // Sorted by (level rank, id): cat/A1 before dog/A2 before library/B2.
    let words: Vec<&str> = entries.iter().map(|e| e["word"].as_str().unwrap()).collect();
    assert_eq!(words, vec!["cat ", "dog", "library"]);
    assert_eq!(entries[0]["id"], 2);
    assert_eq!(entries[0]["translation"], "猫");
    assert_eq!(entries[1]["translation"], "狗; 犬");
    assert_eq!(entries[2]["translation"], "图书馆; 藏书");

    // Phonetics are gone, passthrough fields are not.
    assert!(entries.iter().all(|e| e.get("phonetic").is_none()));
    assert_eq!(entries[2]["examples"][0], "a public library");

    // 4-space pretty printing with literal non-ASCII text.
    assert!(written.starts_with("[\n    {\n        \""));
    assert!(written.contains("猫"));
    assert!(!written.contains("\\u"));
}

#[test]
fn second_run_is_a_fixed_point() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    fs::write(&path, MESSY_DATASET).unwrap();

    run(&path).unwrap();
    let first_pass = fs::read_to_string(&path).unwrap();

    let report = run(&path).unwrap();
    assert_eq!(report.original, report.unique);
    assert_eq!(fs::read_to_string(&path).unwrap(), first_pass);
}

#[test]
fn invalid_level_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocabulary.json");
    let original = r#"[{"id": 1, "word": "cat", "cefr_level": "D1", "translation": "猫"}]"#;
    fs::write(&path, original).unwrap();

    let err = run(&path).unwrap_err();
    assert!(matches!(err, CleanError::UnknownLevel { .. }));

    // The file must be untouched when validation fails.
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
