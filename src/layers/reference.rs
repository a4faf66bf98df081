//! Layer 4: reference-database comparison.
//!
//! Requires the total-match count. The best-match record is informational
//! only; its details are surfaced in the checks when present.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let comparison = document.scientific_comparison.as_ref();

    let total_matches = comparison.and_then(|c| c.total_matches);
    let best_match = comparison.and_then(|c| c.best_match.as_ref());

    let passed = total_matches.is_some();

    let best_match_line = match best_match {
        Some(found) => {
            let name = found
                .object
                .as_ref()
                .and_then(|o| o.name.as_deref())
                .unwrap_or("unnamed object");
            match found.similarity {
                Some(similarity) => {
                    format!("best match: {name} (similarity {similarity:.2})")
                }
                None => format!("best match: {name}"),
            }
        }
        None => "best match: none recorded".to_string(),
    };

    let checks = vec![
        LayerCheck::new(
            format!("total matches: {}", shown(total_matches.as_ref())),
            total_matches.is_some(),
        ),
        LayerCheck::new(best_match_line, best_match.is_some()),
    ];

    LayerOutcome::new(4, "reference database", passed, checks)
}
