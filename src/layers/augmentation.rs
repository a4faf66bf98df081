//! Layer 5: adaptive augmentation.
//!
//! Always passes. Whether the pipeline had prior confirmed cases to augment
//! with is purely informational.

use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let matches_found = document
        .training_enhancement
        .as_ref()
        .and_then(|t| t.matches_found);

    let matches_line = match matches_found {
        Some(count) => format!("augmentation matches: {count}"),
        None => "augmentation matches: 0 (no prior cases)".to_string(),
    };

    let checks = vec![
        LayerCheck::new("augmentation stage executed", true),
        LayerCheck::new(matches_line, true),
    ];

    LayerOutcome::new(5, "adaptive augmentation", true, checks)
}
