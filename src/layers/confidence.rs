//! Layer 9: aggregate confidence.
//!
//! Requires the final weighted confidence score and a recommendations field
//! that is a sequence; the sequence may be empty.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let confidence = document.confidence;
    let recommendations = document.recommendations.as_ref();

    let passed = confidence.is_some() && recommendations.is_some();

    let recommendations_line = match recommendations {
        Some(list) => format!("recommendations: {}", list.len()),
        None => "recommendations: missing".to_string(),
    };

    let checks = vec![
        LayerCheck::new(
            format!("final confidence: {}", shown(confidence.as_ref())),
            confidence.is_some(),
        ),
        LayerCheck::new(recommendations_line, recommendations.is_some()),
    ];

    LayerOutcome::new(9, "aggregate confidence", passed, checks)
}
