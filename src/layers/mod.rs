//! The nine layer validators.
//!
//! Each validator is a pure function over the result document: no I/O, no
//! failure path. Absent sections and fields degrade to failing (or, where
//! the layer's policy says so, trivially passing) outcomes instead of
//! errors, so partial pipeline degradation is reported rather than crashing
//! the run. The validators are stateless and independent; they run
//! sequentially only to keep diagnostic output deterministic.

pub mod augmentation;
pub mod capture;
pub mod catalog;
pub mod confidence;
pub mod corroboration;
pub mod forensic;
pub mod reference;
pub mod visual;
pub mod weather;

use crate::models::document::AnalysisDocument;
use crate::models::outcome::LayerOutcome;

pub const LAYER_COUNT: usize = 9;

/// Run all nine validators in layer order. Always returns exactly
/// `LAYER_COUNT` outcomes, no matter how many sections the document has.
pub fn run_all(document: &AnalysisDocument) -> Vec<LayerOutcome> {
    vec![
        capture::validate(document),
        visual::validate(document),
        forensic::validate(document),
        reference::validate(document),
        augmentation::validate(document),
        corroboration::validate(document),
        weather::validate(document),
        catalog::validate(document),
        confidence::validate(document),
    ]
}

/// Render an optional value for a check description.
pub(crate) fn shown<T: std::fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "missing".to_string(),
    }
}
