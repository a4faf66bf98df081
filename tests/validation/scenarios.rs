//! Document-level scenarios: per-layer policies composed through the full
//! validate-and-summarize path.

use vigil::layers::{self, LAYER_COUNT};
use vigil::models::document::AnalysisDocument;
use vigil::models::outcome::Verdict;
use vigil::summary::summarize;

use crate::fixtures::{complete_document, decode, without};

#[test]
fn complete_document_gets_a_full_verdict() {
    let report = summarize(layers::run_all(&decode(complete_document())));
    assert_eq!(report.passed_count, LAYER_COUNT);
    assert_eq!(report.verdict, Verdict::Full);
}

#[test]
fn capture_metadata_passes_on_the_four_required_fields() {
    // lat 40.7128, lon -74.0060, GPS timestamp and capture timestamp all
    // present: the layer passes on those four; the camera identifier is
    // recorded as a fifth, informational line.
    let outcomes = layers::run_all(&decode(complete_document()));
    let capture = &outcomes[0];
    assert!(capture.passed);
    assert_eq!(
        capture.checks.iter().filter(|c| c.passed).count(),
        capture.checks.len()
    );
    assert!(capture.checks[0].description.contains("40.7128"));
    assert!(capture.checks[1].description.contains("-74.006"));
}

#[test]
fn missing_weather_and_catalog_degrades_but_still_succeeds() {
    // The weather layer tolerates a fully absent subsection; the
    // phenomenon-catalog layer does not. 8 of 9 passing lands in the
    // degraded band, which still counts as overall success.
    let document = without(
        without(complete_document(), "weatherData"),
        "atmosphericComparison",
    );
    let report = summarize(layers::run_all(&decode(document)));

    assert_eq!(report.passed_count, 8);
    assert_eq!(report.verdict, Verdict::Degraded);
    assert!(report.verdict.is_success());

    assert!(report.outcomes[6].passed, "weather passes trivially");
    assert!(!report.outcomes[7].passed, "catalog fails hard");
}

#[test]
fn empty_document_still_produces_nine_outcomes_and_fails() {
    let report = summarize(layers::run_all(&AnalysisDocument::default()));
    assert_eq!(report.outcomes.len(), LAYER_COUNT);
    assert_eq!(report.passed_count, 2);
    assert_eq!(report.verdict, Verdict::Failed);
}

#[test]
fn dropping_one_intolerant_layer_is_degraded_not_failed() {
    let document = without(complete_document(), "aiAnalysis");
    let report = summarize(layers::run_all(&decode(document)));
    assert_eq!(report.passed_count, 8);
    assert_eq!(report.verdict, Verdict::Degraded);
}

#[test]
fn losing_three_layers_drops_below_the_tolerance_threshold() {
    let document = without(
        without(
            without(complete_document(), "aiAnalysis"),
            "atmosphericComparison",
        ),
        "scientificComparison",
    );
    let report = summarize(layers::run_all(&decode(document)));
    assert_eq!(report.passed_count, 6);
    assert_eq!(report.verdict, Verdict::Failed);
    assert!(!report.verdict.is_success());
}

#[test]
fn forensic_layer_survives_on_either_score() {
    // Removing the forensic section leaves the manipulation score in the
    // capture metadata, which still satisfies the either-score rule.
    let document = without(complete_document(), "forensicAnalysis");
    let outcomes = layers::run_all(&decode(document));
    assert!(outcomes[2].passed);
}

#[test]
fn every_outcome_records_its_checks() {
    let outcomes = layers::run_all(&decode(complete_document()));
    for outcome in &outcomes {
        assert!(
            !outcome.checks.is_empty(),
            "layer {} recorded no checks",
            outcome.layer
        );
    }
}
