//! Whole-site scenarios run through the public batch entry points.

use pretty_assertions::assert_eq;
use quiz_core::{Document, QuizDocuments, Status, ValidationResult};
use quiz_engine::{perform_validation_results, perform_validations, validate_site};
use serde_json::{Value, json};

fn questions_json() -> Value {
    json!({
        "questions": {
            "total": 1,
            "data": [{ "questions": "q1", "min-selections": "1", "max-selections": "1" }]
        },
        "q1": { "total": 1, "data": [{ "options": "o1", "next": "RESULT" }] },
        ":names": ["questions", "q1"],
        ":type": "multi-sheet"
    })
}

fn strings_json() -> Value {
    json!({
        "questions": { "total": 1, "data": [{ "q": "q1", "heading": "Pick one" }] },
        "q1": { "total": 1, "data": [{ "options": "o1", "title": "Option one" }] },
        ":names": ["questions", "q1"],
        ":type": "multi-sheet"
    })
}

fn results_json(with_destination: bool) -> Value {
    let destinations = if with_destination {
        json!([{ "result": "r1", "url": "https://x", "basic-fragments": "f1" }])
    } else {
        json!([])
    };
    json!({
        "result": {
            "total": 1,
            "data": [{ "q1": "o1", "result-primary": "r1", "result-secondary": "r2" }]
        },
        "result-destination": { "data": destinations },
        ":type": "multi-sheet"
    })
}

fn doc(value: Value) -> Document {
    Document::try_from(value).expect("fixture should parse")
}

fn invalid_headings(records: &[ValidationResult]) -> Vec<&str> {
    records
        .iter()
        .filter(|record| record.status == Status::Invalid)
        .map(|record| record.heading.as_str())
        .collect()
}

#[test]
fn minimal_quiz_is_fully_valid() {
    let questions = doc(questions_json());
    let strings = doc(strings_json());
    let results = doc(results_json(true));

    let content = perform_validations(&questions, &strings);
    assert_eq!(content.len(), 6);
    assert_eq!(invalid_headings(&content), Vec::<&str>::new());

    let checks = perform_validation_results(&questions, &strings, &results);
    assert_eq!(checks.len(), 7);
    assert_eq!(invalid_headings(&checks), Vec::<&str>::new());
}

#[test]
fn removing_destination_breaks_primary_rules_only() {
    let questions = doc(questions_json());
    let strings = doc(strings_json());
    let results = doc(results_json(false));

    let checks = perform_validation_results(&questions, &strings, &results);
    assert_eq!(
        invalid_headings(&checks),
        vec!["Result Rules for Primary Results (Results)"]
    );
    let rules = &checks[4];
    assert!(rules.body.contains("r1"));
}

#[test]
fn extra_name_is_reported_as_unexpected() {
    let mut strings = strings_json();
    strings[":names"] = json!(["questions", "q1", "q-stale"]);

    let report = perform_validations(&doc(questions_json()), &doc(strings));
    assert_eq!(
        invalid_headings(&report),
        vec!["Names Array Integrity (Strings)"]
    );
    assert!(report[3].body.ends_with("Unexpected names found: q-stale."));
}

#[test]
fn site_without_results_document_runs_content_only() {
    let docs = QuizDocuments {
        questions: Some(doc(questions_json())),
        strings: Some(doc(strings_json())),
        results: None,
    };
    let report = validate_site(&docs);
    assert_eq!(report.content.len(), 6);
    assert!(report.results.is_empty());
    assert!(!report.summary().has_failures());
}

#[test]
fn report_serializes_for_renderers() {
    let docs = QuizDocuments {
        questions: Some(doc(questions_json())),
        strings: Some(doc(strings_json())),
        results: Some(doc(results_json(false))),
    };
    let report = validate_site(&docs);
    let value = serde_json::to_value(&report).expect("serialize");
    assert_eq!(value["results"][4]["status"], "invalid");
    assert_eq!(value["results"][4]["severity"], "negative");
    assert_eq!(value["content"][0]["source"], "questions");
}
