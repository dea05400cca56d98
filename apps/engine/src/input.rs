//! JSON call boundary: the one place where absent or mistyped arguments can appear.
//!
//! Contract violations (a null candidate, a job that is not an object, a peer list
//! that is not an array) fail fast with `EngineError::InvalidArgument`. Anything
//! partial inside a well-shaped argument is tolerated and scored as empty.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::cohort::peer_comparison::PeerComparisonResult;
use crate::engine::ComparisonEngine;
use crate::errors::EngineError;
use crate::matching::job_comparison::ComparisonResult;
use crate::models::{CandidateProfile, JobPosting, PeerProfile};

pub fn parse_candidate(value: &Value) -> Result<CandidateProfile, EngineError> {
    require_object(value, "candidate")?;
    decode(value, "candidate")
}

pub fn parse_job(value: &Value) -> Result<JobPosting, EngineError> {
    require_object(value, "job")?;
    decode(value, "job")
}

pub fn parse_peers(value: &Value) -> Result<Vec<PeerProfile>, EngineError> {
    let items = value.as_array().ok_or_else(|| {
        EngineError::InvalidArgument(format!("peers must be a JSON array, got {}", kind(value)))
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let name = format!("peers[{i}]");
            require_object(item, &name)?;
            decode(item, &name)
        })
        .collect()
}

impl ComparisonEngine {
    pub fn compare_with_job_json(
        &self,
        candidate: &Value,
        job: &Value,
    ) -> Result<ComparisonResult, EngineError> {
        let candidate = parse_candidate(candidate)?;
        let job = parse_job(job)?;
        Ok(self.compare_with_job(&candidate, &job))
    }

    pub fn compare_with_peers_json(
        &self,
        candidate: &Value,
        peers: &Value,
    ) -> Result<PeerComparisonResult, EngineError> {
        let candidate = parse_candidate(candidate)?;
        let peers = parse_peers(peers)?;
        Ok(self.compare_with_peers(&candidate, &peers))
    }
}

pub fn compare_with_job_json(candidate: &Value, job: &Value) -> Result<ComparisonResult, EngineError> {
    ComparisonEngine::default().compare_with_job_json(candidate, job)
}

pub fn compare_with_peers_json(
    candidate: &Value,
    peers: &Value,
) -> Result<PeerComparisonResult, EngineError> {
    ComparisonEngine::default().compare_with_peers_json(candidate, peers)
}

/// Reads a JSON document from disk.
pub fn load_json_file(path: &Path) -> Result<Value, EngineError> {
    debug!(path = %path.display(), "Loading JSON input");
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn require_object(value: &Value, name: &str) -> Result<(), EngineError> {
    if value.is_object() {
        Ok(())
    } else {
        Err(EngineError::InvalidArgument(format!(
            "{name} must be a JSON object, got {}",
            kind(value)
        )))
    }
}

fn decode<T: DeserializeOwned>(value: &Value, name: &str) -> Result<T, EngineError> {
    serde_json::from_value(value.clone())
        .map_err(|e| EngineError::InvalidArgument(format!("{name} has an invalid shape: {e}")))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
