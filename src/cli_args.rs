use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "robocommit",
    version,
    about = "prepare-commit-msg hook that writes an LLM-suggested commit message"
)]
pub struct Cli {
    /// File holding the pending commit message (passed by git)
    pub message_file: PathBuf,

    /// Source of the commit message (message, template, merge, squash or commit)
    pub source: Option<String>,

    /// Commit object name, when amending
    pub commit: Option<String>,

    /// Model name to use (e.g. text-davinci-003)
    #[arg(long)]
    pub model: Option<String>,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Completion endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Maximum number of tokens the model may generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Where to write the prompt sent to the model, for inspection
    #[arg(long)]
    pub debug_prompt: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
