use super::ChatClient;
use crate::config::{
    GenerationConfig, SuiteConfig, DEFAULT_ENDPOINT, DEFAULT_INSTRUCTION, DEFAULT_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
use crate::model::{AskError, Outcome};
use async_trait::async_trait;
use serde_json::json;
use std::time::{Duration, Instant};

/// Client for the generative-language `generateContent` endpoint.
///
/// The API key travels in the request URL, so error text derived from
/// reqwest is stripped of its URL before it reaches a report.
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    persona: String,
    instruction: String,
    generation: GenerationConfig,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(cfg: &SuiteConfig, api_key: String) -> Self {
        let s = &cfg.settings;
        Self {
            client: reqwest::Client::new(),
            endpoint: s
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: s.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            persona: cfg.persona.clone(),
            instruction: s
                .instruction
                .clone()
                .unwrap_or_else(|| DEFAULT_INSTRUCTION.to_string()),
            generation: cfg.generation.clone(),
            timeout: Duration::from_secs(s.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        }
    }

    fn build_prompt(&self, question: &str) -> String {
        format!(
            "{}\n\nUser Question: {}\n\n{}",
            self.persona, question, self.instruction
        )
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "generationConfig": {
                "temperature": self.generation.temperature,
                "topK": self.generation.top_k,
                "topP": self.generation.top_p,
                "maxOutputTokens": self.generation.max_output_tokens,
            }
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }
}

/// Pull the answer text out of a `generateContent` response body.
fn extract_text(body: &serde_json::Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[async_trait]
impl ChatClient for GeminiClient {
    async fn ask(&self, question: &str) -> Outcome {
        let prompt = self.build_prompt(question);
        let body = self.request_body(&prompt);
        tracing::debug!(
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "sending generateContent request"
        );

        let started = Instant::now();
        let resp = match self
            .client
            .post(self.url())
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                let e = e.without_url();
                tracing::warn!(error = %e, "transport failure");
                return Outcome::Failure {
                    error: AskError::Transport(e.to_string()),
                    elapsed: None,
                };
            }
        };

        let status = resp.status();
        let raw = match resp.text().await {
            Ok(t) => t,
            Err(e) => {
                let e = e.without_url();
                tracing::warn!(error = %e, "failed to read response body");
                return Outcome::Failure {
                    error: AskError::Transport(e.to_string()),
                    elapsed: None,
                };
            }
        };
        let elapsed = started.elapsed();

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "endpoint returned an error status");
            return Outcome::Failure {
                error: AskError::Protocol {
                    status: status.as_u16(),
                    body: raw,
                },
                elapsed: Some(elapsed),
            };
        }

        let parsed: serde_json::Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!(raw = %raw, "success status with unparsable payload");
                return Outcome::Failure {
                    error: AskError::Format,
                    elapsed: Some(elapsed),
                };
            }
        };

        match extract_text(&parsed) {
            Some(text) => Outcome::Success { text, elapsed },
            None => {
                tracing::debug!(raw = %raw, "payload is missing candidates/content/parts text");
                Outcome::Failure {
                    error: AskError::Format,
                    elapsed: Some(elapsed),
                }
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
