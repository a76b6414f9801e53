use crate::model::{Outcome, ScoredResult, TestCase};

/// Characters kept in the stored response preview.
pub const PREVIEW_CHARS: usize = 200;

/// Keywords from `expected` whose lowercased form occurs in the lowercased
/// response. Suite order is preserved; each keyword counts at most once.
pub fn matched_keywords(text: &str, expected: &[String]) -> Vec<String> {
    let haystack = text.to_lowercase();
    expected
        .iter()
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .cloned()
        .collect()
}

/// Matched share as a percentage. An empty expected list counts as fully
/// covered: there was nothing to miss.
pub fn coverage(matched: usize, expected: usize) -> f64 {
    if expected == 0 {
        100.0
    } else {
        matched as f64 / expected as f64 * 100.0
    }
}

/// Fold a case and its outcome into one report row.
pub fn score(case: &TestCase, outcome: &Outcome) -> ScoredResult {
    match outcome {
        Outcome::Success { text, elapsed } => {
            let matched = matched_keywords(text, &case.expected_keywords);
            let cov = coverage(matched.len(), case.expected_keywords.len());
            ScoredResult {
                category: case.category.clone(),
                question: case.question.clone(),
                success: true,
                elapsed_secs: Some(elapsed.as_secs_f64()),
                coverage: Some(cov),
                matched: Some(matched),
                response_len: Some(text.chars().count()),
                preview: Some(text.chars().take(PREVIEW_CHARS).collect()),
                error: None,
            }
        }
        Outcome::Failure { error, elapsed } => ScoredResult {
            category: case.category.clone(),
            question: case.question.clone(),
            success: false,
            elapsed_secs: elapsed.map(|d| d.as_secs_f64()),
            coverage: None,
            matched: None,
            response_len: None,
            preview: None,
            error: Some(error.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AskError;
    use std::time::Duration;

    fn case(keywords: &[&str]) -> TestCase {
        TestCase {
            category: "Technical Details - NIDS".into(),
            question: "Explain the NIDS architecture in detail".into(),
            expected_keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn four_of_five_keywords_scores_eighty_percent() {
        let text = "Sudev achieved 96% accuracy with CNN and LSTM";
        let expected = case(&["CNN", "LSTM", "96%", "accuracy", "Flask"]);
        let matched = matched_keywords(text, &expected.expected_keywords);
        assert_eq!(matched, vec!["CNN", "LSTM", "96%", "accuracy"]);
        assert_eq!(coverage(matched.len(), 5), 80.0);
    }

    #[test]
    fn matching_ignores_case_on_both_sides() {
        let matched = matched_keywords(
            "the nids uses a cnn plus lstm hybrid",
            &["CNN".into(), "LSTM".into(), "NIDS".into()],
        );
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn matched_keywords_keep_suite_order() {
        let matched = matched_keywords(
            "LSTM first in the text, CNN second",
            &["CNN".into(), "LSTM".into()],
        );
        assert_eq!(matched, vec!["CNN", "LSTM"]);
    }

    #[test]
    fn no_expected_keywords_counts_as_full_coverage() {
        assert_eq!(coverage(0, 0), 100.0);
        let row = score(
            &case(&[]),
            &Outcome::Success {
                text: "anything".into(),
                elapsed: Duration::from_millis(10),
            },
        );
        assert_eq!(row.coverage, Some(100.0));
        assert_eq!(row.matched, Some(vec![]));
    }

    #[test]
    fn coverage_stays_in_percent_bounds() {
        assert_eq!(coverage(0, 4), 0.0);
        assert_eq!(coverage(4, 4), 100.0);
        assert_eq!(coverage(1, 4), 25.0);
    }

    #[test]
    fn success_row_carries_metrics_and_no_error() {
        let row = score(
            &case(&["CNN"]),
            &Outcome::Success {
                text: "CNN".into(),
                elapsed: Duration::from_secs_f64(1.5),
            },
        );
        assert!(row.success);
        assert_eq!(row.elapsed_secs, Some(1.5));
        assert_eq!(row.response_len, Some(3));
        assert!(row.error.is_none());
    }

    #[test]
    fn failure_row_carries_only_the_error() {
        let row = score(
            &case(&["CNN"]),
            &Outcome::Failure {
                error: AskError::Transport("timed out".into()),
                elapsed: None,
            },
        );
        assert!(!row.success);
        assert_eq!(row.error.as_deref(), Some("transport error: timed out"));
        assert!(row.coverage.is_none());
        assert!(row.elapsed_secs.is_none());
        assert!(row.response_len.is_none());
    }

    #[test]
    fn protocol_failure_keeps_its_elapsed_time() {
        let row = score(
            &case(&[]),
            &Outcome::Failure {
                error: AskError::Protocol {
                    status: 429,
                    body: "slow down".into(),
                },
                elapsed: Some(Duration::from_secs(2)),
            },
        );
        assert_eq!(row.elapsed_secs, Some(2.0));
        assert!(row.error.as_deref().unwrap_or("").contains("429"));
    }

    #[test]
    fn length_and_preview_count_characters_not_bytes() {
        let text = "é".repeat(300);
        let row = score(
            &case(&[]),
            &Outcome::Success {
                text,
                elapsed: Duration::from_millis(5),
            },
        );
        assert_eq!(row.response_len, Some(300));
        let preview = row.preview.unwrap();
        assert_eq!(preview.chars().count(), PREVIEW_CHARS);
    }

    #[test]
    fn short_responses_are_previewed_whole() {
        let row = score(
            &case(&[]),
            &Outcome::Success {
                text: "short".into(),
                elapsed: Duration::from_millis(5),
            },
        );
        assert_eq!(row.preview.as_deref(), Some("short"));
    }
}
