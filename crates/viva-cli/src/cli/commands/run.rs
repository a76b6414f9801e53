use crate::cli::args::{Provider, RunArgs};
use crate::exit_codes;
use std::sync::Arc;
use std::time::Duration;
use viva_core::config::{self, DEFAULT_MODEL, DEFAULT_PAUSE_SECS};
use viva_core::model::Verdict;
use viva_core::providers::fake::FakeClient;
use viva_core::providers::gemini::GeminiClient;
use viva_core::providers::ChatClient;
use viva_core::report::{console, json, summary::RunSummary, RunArtifacts};
use viva_core::runner::Runner;

pub async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let cfg = match config::load_config(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };

    let client: Arc<dyn ChatClient> = match args.provider {
        Provider::Gemini => {
            let Some(api_key) = args.api_key else {
                eprintln!(
                    "config error: the gemini provider needs an API key (--api-key or GEMINI_API_KEY)"
                );
                return Ok(exit_codes::CONFIG_ERROR);
            };
            Arc::new(GeminiClient::new(&cfg, api_key))
        }
        Provider::Fake => Arc::new(FakeClient::new()),
    };

    let started_at = chrono::Utc::now();
    console::print_header(&cfg.suite, cfg.tests.len());

    let pause = Duration::from_secs_f64(cfg.settings.pause_seconds.unwrap_or(DEFAULT_PAUSE_SECS));
    let runner = Runner::new(client.clone()).with_pause(pause);
    let results = runner
        .run_suite(&cfg.tests, Some(console::live_sink()))
        .await;

    let summary = RunSummary::from_results(&results);
    console::print_summary(&summary);

    if let Some(path) = &args.report {
        let artifacts = RunArtifacts {
            suite: cfg.suite.clone(),
            provider: client.provider_name().to_string(),
            model: cfg
                .settings
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            started_at,
            results,
        };
        json::write_report(&artifacts, &summary, path)?;
        eprintln!("Wrote report to {}", path.display());
    }

    Ok(match summary.verdict {
        Verdict::Excellent => exit_codes::SUCCESS,
        Verdict::NeedsAdjustments => exit_codes::NEEDS_ADJUSTMENTS,
    })
}
