//! Completion-wait properties over scripted status probes, including the
//! full poll-then-validate path.

use anyhow::{anyhow, Result};
use std::time::Duration;

use vigil::layers;
use vigil::models::job::{AnalysisStatus, StatusReport};
use vigil::models::outcome::Verdict;
use vigil::poller::{await_completion, PollConfig, PollOutcome, StatusProbe};
use vigil::summary::summarize;

use crate::fixtures::complete_document;

struct ScriptedProbe {
    script: Vec<Result<StatusReport>>,
    queries: usize,
}

impl ScriptedProbe {
    fn new(script: Vec<Result<StatusReport>>) -> Self {
        Self { script, queries: 0 }
    }
}

impl StatusProbe for ScriptedProbe {
    fn query(&mut self) -> Result<StatusReport> {
        let index = self.queries;
        self.queries += 1;
        match self.script.get_mut(index) {
            Some(slot) => std::mem::replace(slot, Err(anyhow!("consumed"))),
            None => Err(anyhow!("script exhausted")),
        }
    }
}

fn in_flight(status: AnalysisStatus) -> Result<StatusReport> {
    Ok(StatusReport {
        status: Some(status),
        analysis_data: None,
        error_message: None,
    })
}

fn config(max_attempts: u32) -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(0),
        max_attempts,
    }
}

#[test]
fn polled_document_validates_end_to_end() {
    let mut probe = ScriptedProbe::new(vec![
        in_flight(AnalysisStatus::Pending),
        in_flight(AnalysisStatus::Processing),
        Ok(StatusReport {
            status: Some(AnalysisStatus::Completed),
            analysis_data: Some(complete_document()),
            error_message: None,
        }),
    ]);

    let document_value = match await_completion(&mut probe, &config(60)) {
        PollOutcome::Completed(value) => value,
        other => panic!("expected completion, got {other:?}"),
    };
    assert_eq!(probe.queries, 3);

    let document = serde_json::from_value(document_value).unwrap();
    let report = summarize(layers::run_all(&document));
    assert_eq!(report.verdict, Verdict::Full);
}

#[test]
fn remote_error_stops_the_wait_at_that_query() {
    let mut probe = ScriptedProbe::new(vec![
        in_flight(AnalysisStatus::Pending),
        in_flight(AnalysisStatus::Processing),
        in_flight(AnalysisStatus::Processing),
        Ok(StatusReport {
            status: Some(AnalysisStatus::Error),
            analysis_data: None,
            error_message: Some("pipeline crashed".to_string()),
        }),
        in_flight(AnalysisStatus::Processing),
    ]);

    match await_completion(&mut probe, &config(60)) {
        PollOutcome::RemoteError { message } => assert_eq!(message, "pipeline crashed"),
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(probe.queries, 4, "no query after the terminal error");
}

#[test]
fn exhausted_budget_is_a_timeout_not_a_remote_error() {
    let mut probe = ScriptedProbe::new(
        (0..10).map(|_| in_flight(AnalysisStatus::Processing)).collect(),
    );

    match await_completion(&mut probe, &config(4)) {
        PollOutcome::TimedOut { attempts } => assert_eq!(attempts, 4),
        other => panic!("expected timeout, got {other:?}"),
    }
    assert_eq!(probe.queries, 4);
}

#[test]
fn transient_blips_do_not_collapse_the_wait() {
    let mut probe = ScriptedProbe::new(vec![
        Err(anyhow!("502 Bad Gateway")),
        in_flight(AnalysisStatus::Processing),
        Err(anyhow!("connection reset")),
        Ok(StatusReport {
            status: Some(AnalysisStatus::Completed),
            analysis_data: Some(complete_document()),
            error_message: None,
        }),
    ]);

    match await_completion(&mut probe, &config(10)) {
        PollOutcome::Completed(_) => {}
        other => panic!("expected completion, got {other:?}"),
    }
    assert_eq!(probe.queries, 4);
}
