use crate::model::{Depth, Rating, ScoredResult, Verdict};
use serde::{Deserialize, Serialize};

/// One failed case in the summary's failure list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureNote {
    pub category: String,
    pub error: String,
}

/// Aggregate metrics over a finished run.
///
/// Means cover successful cases only. When a run had no successes the means
/// and their tier labels are omitted rather than reported as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_elapsed_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_coverage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_response_len: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<Rating>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<Depth>,
    pub failures: Vec<FailureNote>,
    pub verdict: Verdict,
}

impl RunSummary {
    /// Fold scored rows into the run-level summary.
    ///
    /// The verdict is excellent only when every case succeeded and mean
    /// coverage clears 75%; anything else needs adjustments.
    pub fn from_results(results: &[ScoredResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.success).count();
        let failed = total - passed;

        // Failure rows may carry timing (protocol errors do); only successes
        // count toward the means.
        let mean_elapsed_secs = mean(
            results
                .iter()
                .filter(|r| r.success)
                .filter_map(|r| r.elapsed_secs),
        );
        let mean_coverage = mean(
            results
                .iter()
                .filter(|r| r.success)
                .filter_map(|r| r.coverage),
        );
        let mean_response_len = mean(
            results
                .iter()
                .filter(|r| r.success)
                .filter_map(|r| r.response_len.map(|n| n as f64)),
        );

        let failures = results
            .iter()
            .filter(|r| !r.success)
            .map(|r| FailureNote {
                category: r.category.clone(),
                error: r.error.clone().unwrap_or_default(),
            })
            .collect();

        let verdict = if failed == 0 && mean_coverage.is_some_and(|c| c > 75.0) {
            Verdict::Excellent
        } else {
            Verdict::NeedsAdjustments
        };

        RunSummary {
            total,
            passed,
            failed,
            mean_elapsed_secs,
            mean_coverage,
            mean_response_len,
            speed: mean_elapsed_secs.map(speed_rating),
            accuracy: mean_coverage.map(accuracy_rating),
            depth: mean_response_len.map(depth_rating),
            failures,
            verdict,
        }
    }
}

fn mean(xs: impl Iterator<Item = f64>) -> Option<f64> {
    let xs: Vec<f64> = xs.collect();
    if xs.is_empty() {
        None
    } else {
        Some(xs.iter().sum::<f64>() / xs.len() as f64)
    }
}

/// Under 3s mean is excellent, under 5s good, anything slower needs work.
pub fn speed_rating(mean_secs: f64) -> Rating {
    if mean_secs < 3.0 {
        Rating::Excellent
    } else if mean_secs < 5.0 {
        Rating::Good
    } else {
        Rating::NeedsImprovement
    }
}

/// Above 80% mean coverage is excellent, above 60% good.
pub fn accuracy_rating(mean_coverage: f64) -> Rating {
    if mean_coverage > 80.0 {
        Rating::Excellent
    } else if mean_coverage > 60.0 {
        Rating::Good
    } else {
        Rating::NeedsImprovement
    }
}

/// Above 500 chars mean length is detailed, above 200 moderate.
pub fn depth_rating(mean_len: f64) -> Depth {
    if mean_len > 500.0 {
        Depth::Detailed
    } else if mean_len > 200.0 {
        Depth::Moderate
    } else {
        Depth::Brief
    }
}
