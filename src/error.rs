use std::time::Duration;
use thiserror::Error;

/// Fatal failures of a verification run.
///
/// Layer-level degradation is never one of these: a failing layer is data
/// (a `LayerOutcome` with `passed = false`), not an error. Only the three
/// conditions that make the run itself unable to produce a report are typed
/// here; everything else travels as `anyhow::Error` with context.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The external submission step (register, upload, or analysis start)
    /// was rejected by the service.
    #[error("submission rejected: HTTP {status}: {body}")]
    Submission { status: u16, body: String },

    /// No terminal status was observed within the attempt budget.
    #[error("analysis never reached a terminal state after {attempts} attempts ({waited:?} waited)")]
    PollTimeout { attempts: u32, waited: Duration },

    /// The pipeline itself reported failure; the upstream message is
    /// carried verbatim.
    #[error("analysis pipeline reported failure: {message}")]
    RemoteAnalysis { message: String },
}
