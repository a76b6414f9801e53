use super::ChatClient;
use crate::model::Outcome;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;

/// Offline stand-in for the live endpoint.
///
/// Answers with a fixed canned text, or pops from a scripted queue of
/// outcomes when one was provided. Once the queue drains it falls back to
/// the canned text.
pub struct FakeClient {
    canned: String,
    script: Mutex<VecDeque<Outcome>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            canned: "This is a canned answer.".to_string(),
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.canned = text.into();
        self
    }

    pub fn with_outcomes(self, outcomes: Vec<Outcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            ..self
        }
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for FakeClient {
    async fn ask(&self, _question: &str) -> Outcome {
        if let Some(outcome) = self.script.lock().await.pop_front() {
            return outcome;
        }
        Outcome::Success {
            text: self.canned.clone(),
            elapsed: Duration::from_millis(1),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
