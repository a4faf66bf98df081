//! Aggregation of the nine layer outcomes into one verdict.
//!
//! The threshold is deliberately non-strict: weather, satellite, and
//! balloon corroboration depend on third-party credentials that common
//! deployments legitimately leave unconfigured, so requiring all nine
//! layers would make the harness unusable there. Core layers are expected
//! to always pass; peripheral layers may degrade.

use crate::layers::LAYER_COUNT;
use crate::models::outcome::{LayerOutcome, ValidationReport, Verdict};

/// Minimum passing layers for the run to still count as overall success.
pub const DEGRADED_THRESHOLD: usize = 7;

/// Fold the layer outcomes into a report with the tolerance-based verdict:
/// all nine passing is `Full`, at least [`DEGRADED_THRESHOLD`] is
/// `Degraded` (still success), anything below is `Failed`.
pub fn summarize(outcomes: Vec<LayerOutcome>) -> ValidationReport {
    debug_assert_eq!(outcomes.len(), LAYER_COUNT);

    let passed_count = outcomes.iter().filter(|o| o.passed).count();
    let verdict = if passed_count == LAYER_COUNT {
        Verdict::Full
    } else if passed_count >= DEGRADED_THRESHOLD {
        Verdict::Degraded
    } else {
        Verdict::Failed
    };

    ValidationReport {
        outcomes,
        passed_count,
        verdict,
    }
}
