//! Status queries for a submitted job.

use anyhow::{Context, Result};

use super::client::validate_response_status;
use super::session::PipelineClient;
use crate::models::job::{JobHandle, StatusReport};
use crate::poller::StatusProbe;

/// Probe bound to one job. Every failure mode here (connection errors,
/// non-success responses, unparseable bodies) is transient from the
/// poller's point of view and only consumes an attempt.
pub struct JobStatusProbe<'a> {
    client: &'a PipelineClient,
    handle: &'a JobHandle,
}

impl<'a> JobStatusProbe<'a> {
    pub fn new(client: &'a PipelineClient, handle: &'a JobHandle) -> Self {
        Self { client, handle }
    }
}

impl StatusProbe for JobStatusProbe<'_> {
    fn query(&mut self) -> Result<StatusReport> {
        let url = self
            .client
            .endpoint(&format!("/api/analyze/{}/status", self.handle.analysis_id));
        let response = self
            .client
            .http()
            .get(url)
            .bearer_auth(&self.handle.token)
            .send()
            .context("status request failed")?;
        validate_response_status(&response, "status query")?;
        response.json().context("status reply was not parseable")
    }
}
