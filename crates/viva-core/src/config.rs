use crate::model::TestCase;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const SUPPORTED_SUITE_VERSION: u32 = 1;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_INSTRUCTION: &str = "Provide a helpful, accurate response:";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAUSE_SECS: f64 = 1.0;

#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(pub String);

/// A whole evaluation suite as loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    pub version: u32,
    pub suite: String,
    /// System prompt prefixed to every question.
    pub persona: String,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub generation: GenerationConfig,
    pub tests: Vec<TestCase>,
}

/// Request plumbing knobs. All optional; defaults applied where consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    /// Trailing instruction appended after the user question.
    pub instruction: Option<String>,
    pub timeout_seconds: Option<u64>,
    /// Pause between consecutive requests, to stay under rate limits.
    pub pause_seconds: Option<f64>,
}

/// Sampling parameters forwarded verbatim in `generationConfig`. The floats
/// are f64 so YAML literals like 0.7 reach the wire unwidened.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_temperature() -> f64 {
    0.7
}
fn default_top_k() -> u32 {
    40
}
fn default_top_p() -> f64 {
    0.95
}
fn default_max_output_tokens() -> u32 {
    1000
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let cfg: SuiteConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if cfg.version != SUPPORTED_SUITE_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_SUITE_VERSION
        )));
    }
    if cfg.tests.is_empty() {
        return Err(ConfigError("config has no tests".into()));
    }
    if let Some(p) = cfg.settings.pause_seconds {
        // Duration::from_secs_f64 panics on NaN, infinities, negatives and
        // values past Duration's range; gate all of them here.
        if Duration::try_from_secs_f64(p).is_err() {
            return Err(ConfigError(format!(
                "pause_seconds must be a finite, non-negative number of seconds, got {p}"
            )));
        }
    }
    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, include_str!("../../../suite.yaml"))
        .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
