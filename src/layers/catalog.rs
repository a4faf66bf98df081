//! Layer 8: phenomenon-catalog comparison.
//!
//! The strictest layer: total absence of the subsection is a hard fail, and
//! both the total-match count and the best match must be present. The
//! strong-match flag is recorded but informational.

use super::shown;
use crate::models::document::AnalysisDocument;
use crate::models::outcome::{LayerCheck, LayerOutcome};

const NAME: &str = "phenomenon catalog";

pub fn validate(document: &AnalysisDocument) -> LayerOutcome {
    let comparison = match document.atmospheric_comparison.as_ref() {
        Some(comparison) => comparison,
        None => {
            return LayerOutcome::new(
                8,
                NAME,
                false,
                vec![LayerCheck::new(
                    "phenomenon-catalog section missing from the result",
                    false,
                )],
            );
        }
    };

    let total_matches = comparison.total_matches;
    let best_match = comparison.best_match.as_ref();
    let strong_match = comparison.has_strong_match;

    let passed = total_matches.is_some() && best_match.is_some();

    let best_match_line = match best_match {
        Some(found) => {
            let name = found
                .phenomenon
                .as_ref()
                .and_then(|p| p.name.as_deref())
                .unwrap_or("unnamed phenomenon");
            match found.score {
                Some(score) => format!("best match: {name} (score {score:.0}/100)"),
                None => format!("best match: {name}"),
            }
        }
        None => "best match: missing".to_string(),
    };

    let checks = vec![
        LayerCheck::new(
            format!("total matches: {}", shown(total_matches.as_ref())),
            total_matches.is_some(),
        ),
        LayerCheck::new(best_match_line, best_match.is_some()),
        LayerCheck::new(
            format!(
                "strong match: {}",
                match strong_match {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "not reported",
                }
            ),
            strong_match.is_some(),
        ),
    ];

    LayerOutcome::new(8, NAME, passed, checks)
}
