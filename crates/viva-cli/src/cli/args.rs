use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "viva",
    version,
    about = "Keyword-coverage test harness for persona chatbots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an evaluation suite against a chat provider
    Run(RunArgs),
    /// Write a sample suite to get started
    Init(InitArgs),
}

#[derive(Parser, Clone)]
pub struct RunArgs {
    #[arg(long, default_value = "suite.yaml")]
    pub config: PathBuf,

    /// API key for the gemini provider
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat backend to put the suite's questions to
    #[arg(long, value_enum, default_value_t = Provider::Gemini)]
    pub provider: Provider,

    /// Write the machine-readable run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Live generative-language endpoint (needs an API key)
    Gemini,
    /// Offline canned-answer provider, for smoke runs
    Fake,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "suite.yaml")]
    pub out: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
