use crate::report::summary::RunSummary;
use crate::report::RunArtifacts;
use std::path::Path;

/// Write the machine-readable run report.
pub fn write_report(
    artifacts: &RunArtifacts,
    summary: &RunSummary,
    out: &Path,
) -> anyhow::Result<()> {
    let v = serde_json::json!({
        "suite": artifacts.suite,
        "provider": artifacts.provider,
        "model": artifacts.model,
        "started_at": artifacts.started_at,
        "harness_version": env!("CARGO_PKG_VERSION"),
        "results": artifacts.results,
        "summary": summary,
    });
    std::fs::write(out, serde_json::to_string_pretty(&v)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScoredResult;

    #[test]
    fn report_file_round_trips_through_serde() {
        let artifacts = RunArtifacts {
            suite: "demo".into(),
            provider: "fake".into(),
            model: "gemini-1.5-flash".into(),
            started_at: chrono::Utc::now(),
            results: vec![ScoredResult {
                category: "c".into(),
                question: "q".into(),
                success: true,
                elapsed_secs: Some(0.5),
                coverage: Some(100.0),
                matched: Some(vec!["CNN".into()]),
                response_len: Some(3),
                preview: Some("CNN".into()),
                error: None,
            }],
        };
        let summary = RunSummary::from_results(&artifacts.results);

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.json");
        write_report(&artifacts, &summary, &out).unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(v["suite"], "demo");
        assert_eq!(v["provider"], "fake");
        assert_eq!(v["harness_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(v["results"][0]["matched"][0], "CNN");
        assert_eq!(v["summary"]["passed"], 1);
        assert_eq!(v["summary"]["verdict"], "excellent");
        // Failure-only fields stay out of success rows.
        assert!(v["results"][0].get("error").is_none());
    }
}
