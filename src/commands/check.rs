//! Offline validation of a persisted result document.
//!
//! Accepts either a bare result document or a full status payload (the
//! shape the status endpoint returns, with the document nested under
//! `analysisData`), so previously saved replies validate unchanged.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::layers;
use crate::models::document::AnalysisDocument;
use crate::output;
use crate::summary::summarize;

/// Execute the check command
pub fn execute(result_path: &Path) -> Result<()> {
    output::print_banner(&format!("Validating {}", result_path.display()));

    let raw = std::fs::read_to_string(result_path)
        .with_context(|| format!("reading {}", result_path.display()))?;
    let value: Value =
        serde_json::from_str(&raw).context("saved result is not valid JSON")?;

    let document_value = match value.get("analysisData") {
        Some(nested) => nested.clone(),
        None => value,
    };
    let document: AnalysisDocument = serde_json::from_value(document_value)
        .context("result document does not match the expected shape")?;

    let report = summarize(layers::run_all(&document));
    output::print_report(&report);

    if report.verdict.is_success() {
        Ok(())
    } else {
        bail!(
            "validation failed: only {}/{} layers passed",
            report.passed_count,
            layers::LAYER_COUNT
        )
    }
}
