//! Bounded-retry wait for a job to reach a terminal state.
//!
//! The wait is a fixed-interval loop over a status probe, not an exponential
//! backoff: the upstream pipeline's duration is bounded and roughly known,
//! so backoff would only delay detection of genuine failures. The loop is
//! read-only and therefore restartable; re-invoking it after a timeout
//! re-queries the same job without side effects.
//!
//! Transient query failures (network blips, unparseable replies, replies
//! with no recognizable status) consume an attempt and nothing more. A
//! reported `error` status aborts immediately without consuming the rest of
//! the budget.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use crate::models::job::{AnalysisStatus, StatusReport};

/// Attempts between progress lines. Observability only, no control-flow
/// effect.
const PROGRESS_EVERY: u32 = 5;

/// One status query per call. `Err` means the query itself failed and is
/// treated as transient.
pub trait StatusProbe {
    fn query(&mut self) -> Result<StatusReport>;
}

/// Wait budget: fixed delay between queries and a maximum attempt count,
/// for a total budget of `interval * max_attempts`.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 60,
        }
    }
}

impl PollConfig {
    /// Total wall-clock budget of this configuration.
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

/// Tagged outcome of the wait. The completed document is kept as raw JSON
/// so the caller can persist it verbatim before typed decoding.
#[derive(Debug)]
pub enum PollOutcome {
    /// Terminal `completed` status with its attached result document.
    Completed(serde_json::Value),
    /// Terminal `error` status; upstream message carried verbatim.
    RemoteError { message: String },
    /// Attempt budget exhausted without observing a terminal status.
    TimedOut { attempts: u32 },
}

/// Poll until a terminal status is observed or the budget runs out.
///
/// Attempt accounting: every query consumes one attempt, including queries
/// that fail transiently. A `completed` reply missing its document is also
/// transient (the sole success path must carry the attached result). The
/// sleep happens between queries, never after the last one, and never after
/// a terminal status.
pub fn await_completion(probe: &mut dyn StatusProbe, config: &PollConfig) -> PollOutcome {
    for attempt in 1..=config.max_attempts {
        match probe.query() {
            Ok(report) => match report.status {
                Some(AnalysisStatus::Completed) => {
                    if let Some(document) = report.analysis_data {
                        return PollOutcome::Completed(document);
                    }
                    // Completed with no document attached: query again.
                }
                Some(AnalysisStatus::Error) => {
                    let message = report
                        .error_message
                        .unwrap_or_else(|| "analysis failed without a message".to_string());
                    return PollOutcome::RemoteError { message };
                }
                Some(status) => {
                    if attempt % PROGRESS_EVERY == 0 {
                        println!(
                            "{}",
                            format!("  still {status} after {attempt} attempts").dimmed()
                        );
                    }
                }
                // No recognizable status: transient, retry.
                None => {}
            },
            // Query failed outright: transient, retry.
            Err(_) => {}
        }

        if attempt < config.max_attempts {
            std::thread::sleep(config.interval);
        }
    }

    PollOutcome::TimedOut {
        attempts: config.max_attempts,
    }
}
