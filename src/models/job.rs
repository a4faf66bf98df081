use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an analysis job as reported by the service.
///
/// Transitions are monotonic: `Pending -> Processing -> {Completed | Error}`.
/// `Completed` and `Error` are terminal and never revisited, so the status
/// poller may stop as soon as it observes either.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AnalysisStatus {
    /// Job accepted but not yet picked up by the pipeline.
    #[serde(rename = "pending")]
    Pending,

    /// Pipeline is working. Older deployments report this as "analyzing".
    #[serde(rename = "processing", alias = "analyzing")]
    Processing,

    /// Pipeline finished; the result document is attached. Terminal.
    #[serde(rename = "completed")]
    Completed,

    /// Pipeline failed; an error message is attached. Terminal.
    #[serde(rename = "error")]
    Error,
}

impl AnalysisStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AnalysisStatus::Completed | AnalysisStatus::Error)
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisStatus::Pending => write!(f, "pending"),
            AnalysisStatus::Processing => write!(f, "processing"),
            AnalysisStatus::Completed => write!(f, "completed"),
            AnalysisStatus::Error => write!(f, "error"),
        }
    }
}

/// Handle to one submitted job: the identifier the service assigned plus the
/// bearer token of the account that submitted it. Data only; the service
/// owns the job itself.
#[derive(Debug, Clone)]
pub struct JobHandle {
    pub analysis_id: String,
    pub token: String,
    pub submitted_at: DateTime<Utc>,
}

/// One reply from the status endpoint.
///
/// A reply whose `status` field is missing does not abort the wait; the
/// poller treats it as a transient query failure. The result document is
/// kept as raw JSON so it can be persisted verbatim before typed decoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    #[serde(default)]
    pub status: Option<AnalysisStatus>,
    #[serde(default)]
    pub analysis_data: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}
