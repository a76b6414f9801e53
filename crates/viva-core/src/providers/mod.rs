pub mod fake;
pub mod gemini;

use crate::model::Outcome;
use async_trait::async_trait;

/// A chat backend the runner can put questions to.
///
/// Implementations normalize every failure mode into `Outcome::Failure`;
/// nothing a provider does can abort a suite run.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn ask(&self, question: &str) -> Outcome;

    fn provider_name(&self) -> &'static str;
}
