//! Integration tests for the verification harness:
//! - document scenarios across the nine layers and the verdict policy
//! - completion-wait properties over scripted status probes
//! - persistence and offline re-validation of saved documents

mod fixtures;
mod persistence;
mod polling;
mod scenarios;
