//! Submission flow against the analysis service.
//!
//! Three calls produce a [`JobHandle`]: register a throwaway account (the
//! harness never reuses credentials between runs), upload the fixture
//! image, and start the analysis. Any rejected step surfaces as a typed
//! submission error carrying the service's status code and body.

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::blocking::multipart::Form;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::path::Path;
use uuid::Uuid;

use super::client::create_http_client;
use crate::error::HarnessError;
use crate::models::job::JobHandle;

/// Client for the analysis service, bound to one base URL.
pub struct PipelineClient {
    http: Client,
    base_url: String,
}

/// Bearer credentials of the throwaway submission account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

#[derive(Deserialize)]
struct RegisterReply {
    token: String,
}

#[derive(Deserialize)]
struct UploadReply {
    analysis: UploadedRecord,
}

#[derive(Deserialize)]
struct UploadedRecord {
    id: RawId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeReply {
    analysis_id: RawId,
}

/// Record identifiers come back numeric from relational deployments and as
/// strings elsewhere; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(id) => id.to_string(),
            RawId::Text(id) => id,
        }
    }
}

impl PipelineClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: create_http_client()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Register a unique throwaway account and return its bearer token.
    pub fn register(&self) -> Result<Credentials> {
        let run_id = Uuid::new_v4().simple().to_string();
        let username = format!("vigil-{}", &run_id[..12]);
        let payload = json!({
            "username": username.as_str(),
            "email": format!("{username}@vigil.invalid"),
            "password": run_id.as_str(),
        });

        let response = self
            .http
            .post(self.endpoint("/api/auth/register"))
            .json(&payload)
            .send()
            .context("registration request failed")?;
        let response = accepted(response)?;

        let reply: RegisterReply = response
            .json()
            .context("registration reply had no token")?;
        Ok(Credentials {
            username,
            token: reply.token,
        })
    }

    /// Upload the fixture image; returns the upload record id.
    pub fn upload(
        &self,
        credentials: &Credentials,
        image: &Path,
        title: &str,
        location: &str,
    ) -> Result<String> {
        let form = Form::new()
            .text("title", title.to_string())
            .text(
                "description",
                "Automated end-to-end verification submission".to_string(),
            )
            .text("location", location.to_string())
            .file("file", image)
            .with_context(|| format!("reading fixture image {}", image.display()))?;

        let response = self
            .http
            .post(self.endpoint("/api/uploads"))
            .bearer_auth(&credentials.token)
            .multipart(form)
            .send()
            .context("upload request failed")?;
        let response = accepted(response)?;

        let reply: UploadReply = response.json().context("upload reply had no record id")?;
        Ok(reply.analysis.id.into_string())
    }

    /// Start the analysis for an uploaded record; returns the job handle.
    pub fn start_analysis(
        &self,
        credentials: &Credentials,
        upload_id: &str,
    ) -> Result<JobHandle> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/analyze/{upload_id}")))
            .bearer_auth(&credentials.token)
            .send()
            .context("analysis-start request failed")?;
        let response = accepted(response)?;

        let reply: AnalyzeReply = response
            .json()
            .context("analysis-start reply had no job id")?;
        Ok(JobHandle {
            analysis_id: reply.analysis_id.into_string(),
            token: credentials.token.clone(),
            submitted_at: Utc::now(),
        })
    }
}

/// Turn a rejected submission response into the typed error. The body is
/// kept verbatim; it usually carries the service's own explanation.
fn accepted(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(HarnessError::Submission {
        status: status.as_u16(),
        body,
    }
    .into())
}
