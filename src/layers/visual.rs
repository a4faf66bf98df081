//! Layer 2: visual classification.
//!
//! Requires the narrative description, the category, and the confidence
//! score. The detected-object list is informational and may be empty.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let classification = document.ai_analysis.as_ref();

    let description = classification.and_then(|c| c.description.as_deref());
    let category = classification.and_then(|c| c.category.as_deref());
    let confidence = classification.and_then(|c| c.confidence);
    let object_count = classification
        .and_then(|c| c.features.as_ref())
        .and_then(|f| f.detected_objects.as_ref())
        .map_or(0, Vec::len);

    let passed = description.is_some() && category.is_some() && confidence.is_some();

    let checks = vec![
        LayerCheck::new(
            format!(
                "narrative description ({} characters)",
                description.map_or(0, str::len)
            ),
            description.is_some(),
        ),
        LayerCheck::new(
            format!("category: {}", shown(category.as_ref())),
            category.is_some(),
        ),
        LayerCheck::new(
            format!("confidence: {}", shown(confidence.as_ref())),
            confidence.is_some(),
        ),
        LayerCheck::new(format!("detected objects: {object_count}"), true),
    ];

    LayerOutcome::new(2, "visual classification", passed, checks)
}
