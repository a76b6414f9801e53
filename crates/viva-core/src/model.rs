use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// One suite entry: a question plus the keywords a good answer mentions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCase {
    pub category: String,
    pub question: String,
    #[serde(default)]
    pub expected_keywords: Vec<String>,
}

/// Why a request produced no usable answer. Never fatal: the runner records
/// the error and moves to the next case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    /// Connection, DNS or timeout trouble before a status line arrived.
    #[error("transport error: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Protocol { status: u16, body: String },
    /// Success status, but no candidates/content/parts text in the payload.
    #[error("invalid response format")]
    Format,
}

/// What one request/response cycle produced.
///
/// `elapsed` covers send plus body read. Transport failures carry no timing
/// because the measurement never completed.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success {
        text: String,
        elapsed: Duration,
    },
    Failure {
        error: AskError,
        elapsed: Option<Duration>,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

/// A scored test case, ready for reporting. Success rows carry the metric
/// fields; failure rows carry only `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredResult {
    pub category: String,
    pub question: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_secs: Option<f64>,
    /// Share of expected keywords found, 0.0..=100.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    /// Keywords found in the response, in suite order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<Vec<String>>,
    /// Response length in characters, not bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_len: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Tier for mean response time and mean keyword coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
}

/// Tier for mean response length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Depth {
    Detailed,
    Moderate,
    Brief,
}

/// The single pass/fail conclusion of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Excellent,
    NeedsAdjustments,
}
