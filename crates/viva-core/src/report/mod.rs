pub mod console;
pub mod json;
pub mod summary;

use crate::model::ScoredResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one run produced, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunArtifacts {
    pub suite: String,
    pub provider: String,
    pub model: String,
    pub started_at: DateTime<Utc>,
    pub results: Vec<ScoredResult>,
}
