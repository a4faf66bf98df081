//! Layer 3: integrity and forensics.
//!
//! Either a manipulation score (recorded with the capture metadata) or an
//! authenticity score (recorded with the forensic findings) suffices; full
//! tolerance for whichever one is absent.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let manipulation = document
        .exif_data
        .as_ref()
        .and_then(|m| m.manipulation_score);
    let authenticity = document
        .forensic_analysis
        .as_ref()
        .and_then(|f| f.authenticity_score);

    let passed = manipulation.is_some() || authenticity.is_some();

    let checks = vec![
        LayerCheck::new(
            format!("manipulation score: {}", shown(manipulation.as_ref())),
            manipulation.is_some(),
        ),
        LayerCheck::new(
            format!("authenticity score: {}", shown(authenticity.as_ref())),
            authenticity.is_some(),
        ),
    ];

    LayerOutcome::new(3, "integrity forensics", passed, checks)
}
