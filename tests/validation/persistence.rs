//! Persisted-output behavior and offline re-validation.

use serde_json::{json, Value};

use vigil::commands::{check, run};

use crate::fixtures::complete_document;

#[test]
fn persisted_document_round_trips_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis-result.json");

    let document = complete_document();
    run::persist_document(&document, &path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let reloaded: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(reloaded, document);
}

#[test]
fn check_accepts_a_persisted_bare_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("analysis-result.json");
    run::persist_document(&complete_document(), &path).unwrap();

    assert!(check::execute(&path).is_ok());
}

#[test]
fn check_accepts_a_full_status_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status-reply.json");
    let payload = json!({
        "status": "completed",
        "analysisId": 17,
        "analysisData": complete_document()
    });
    run::persist_document(&payload, &path).unwrap();

    assert!(check::execute(&path).is_ok());
}

#[test]
fn check_fails_on_a_document_below_the_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    run::persist_document(&json!({}), &path).unwrap();

    assert!(check::execute(&path).is_err());
}

#[test]
fn check_rejects_unparseable_input_without_panicking() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json at all").unwrap();

    assert!(check::execute(&path).is_err());
}
