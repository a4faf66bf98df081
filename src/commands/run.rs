//! Full verification run: submit, wait, persist, validate, report.

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{JobStatusProbe, PipelineClient};
use crate::error::HarnessError;
use crate::layers;
use crate::models::document::AnalysisDocument;
use crate::output;
use crate::poller::{await_completion, PollConfig, PollOutcome};
use crate::summary::summarize;

pub struct RunOptions {
    pub image: PathBuf,
    pub server: String,
    pub title: String,
    pub location: String,
    pub output: PathBuf,
    pub poll_interval: Duration,
    pub max_attempts: u32,
}

/// Execute the run command
pub fn execute(options: RunOptions) -> Result<()> {
    if !options.image.exists() {
        bail!("fixture image not found: {}", options.image.display());
    }

    output::print_banner(&format!(
        "Submitting {} to {}",
        options.image.display(),
        options.server
    ));

    // 1. Submit: register, upload, start. Any rejection aborts the run.
    let client = PipelineClient::new(&options.server)?;

    let credentials = client.register().context("registering the submission account")?;
    output::print_step(&format!("registered as {}", credentials.username));

    let upload_id = client
        .upload(&credentials, &options.image, &options.title, &options.location)
        .context("uploading the fixture image")?;
    output::print_step(&format!("uploaded (record {upload_id})"));

    let handle = client
        .start_analysis(&credentials, &upload_id)
        .context("starting the analysis")?;
    output::print_step(&format!("analysis started (job {})", handle.analysis_id));

    // 2. Wait for a terminal state under the attempt budget.
    let config = PollConfig {
        interval: options.poll_interval,
        max_attempts: options.max_attempts,
    };
    output::print_banner(&format!(
        "Waiting for completion (up to {} queries every {:?})",
        config.max_attempts, config.interval
    ));

    let mut probe = JobStatusProbe::new(&client, &handle);
    let document_value = match await_completion(&mut probe, &config) {
        PollOutcome::Completed(document) => document,
        PollOutcome::RemoteError { message } => {
            return Err(HarnessError::RemoteAnalysis { message }.into());
        }
        PollOutcome::TimedOut { attempts } => {
            return Err(HarnessError::PollTimeout {
                attempts,
                waited: config.budget(),
            }
            .into());
        }
    };

    let elapsed = Utc::now().signed_duration_since(handle.submitted_at);
    output::print_step(&format!(
        "analysis completed in {}s",
        elapsed.num_seconds()
    ));

    // 3. Persist the document before validating it, so even a document that
    //    fails typed decoding is captured for offline inspection.
    persist_document(&document_value, &options.output)?;
    output::print_step(&format!("result saved to {}", options.output.display()));

    // 4. Validate and summarize.
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

/// Write the result document to disk in one shot. The string is fully
/// serialized before any write happens, so a failure cannot leave a
/// half-written report behind.
pub fn persist_document(document: &Value, path: &Path) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(document).context("serializing the result document")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("writing the result document to {}", path.display()))
}
