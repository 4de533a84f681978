//! Shared fixtures for the workspace-level integration tests.

use serde::Deserialize;

use lazyseq_core::{RangeConfig, ResumeSignal};

/// Top-level layout of `tests/testdata/sequence_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub ranges: Vec<RangeCase>,
    pub traces: Vec<TraceCase>,
}

/// A range configuration and its full materialization.
#[derive(Debug, Deserialize)]
pub struct RangeCase {
    pub config: RangeConfig,
    pub values: Vec<i64>,
}

/// A scripted sequence of resumes and the values they must produce.
#[derive(Debug, Deserialize)]
pub struct TraceCase {
    pub sequence: String,
    pub steps: Vec<TraceStep>,
}

/// One resume: the optional signal sent and the expected step.
///
/// `value` is a decimal string so big integers survive JSON.
#[derive(Debug, Deserialize)]
pub struct TraceStep {
    #[serde(default)]
    pub signal: Option<ResumeSignal>,
    #[serde(default)]
    pub value: Option<String>,
    pub done: bool,
}

/// Load the golden file shipped with the workspace tests.
pub fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sequence_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}
