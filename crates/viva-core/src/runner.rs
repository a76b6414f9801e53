use crate::model::{ScoredResult, TestCase};
use crate::providers::ChatClient;
use crate::scoring;
use std::sync::Arc;
use std::time::Duration;

/// Called after each case completes: (1-based index, total, scored row).
pub type CaseSink = Arc<dyn Fn(usize, usize, &ScoredResult) + Send + Sync>;

/// Drives a suite through a chat client, one case at a time, in suite order.
pub struct Runner {
    client: Arc<dyn ChatClient>,
    pause: Duration,
}

impl Runner {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            client,
            pause: Duration::from_secs_f64(crate::config::DEFAULT_PAUSE_SECS),
        }
    }

    /// Override the pause between consecutive requests. Tests run with zero.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Ask every case and score its answer. A failed case is recorded and the
    /// run moves on; nothing short of running out of cases stops the loop.
    /// The pause is applied between requests, not after the last one.
    pub async fn run_suite(&self, cases: &[TestCase], sink: Option<CaseSink>) -> Vec<ScoredResult> {
        let total = cases.len();
        let mut results = Vec::with_capacity(total);

        for (i, case) in cases.iter().enumerate() {
            tracing::info!(case = i + 1, total, category = %case.category, "asking the provider");
            let outcome = self.client.ask(&case.question).await;
            let row = scoring::score(case, &outcome);
            if !row.success {
                tracing::warn!(
                    category = %case.category,
                    error = row.error.as_deref().unwrap_or(""),
                    "case failed"
                );
            }
            if let Some(sink) = &sink {
                sink(i + 1, total, &row);
            }
            results.push(row);

            if i + 1 < total && !self.pause.is_zero() {
                tokio::time::sleep(self.pause).await;
            }
        }

        results
    }
}
