mod cli_args;
mod config;
mod debug_prompt;
mod error;
mod git;
mod hook;
mod llm;
mod logging;
mod setup;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process::ExitCode;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::git::GitCli;
use crate::hook::Outcome;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("{err:#}").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    log::debug!(
        "prepare-commit-msg for {} (source: {:?}, commit: {:?})",
        cli.message_file.display(),
        cli.source,
        cli.commit
    );

    let cfg = Config::from_sources(cli);
    let changes = GitCli::new(cfg.excluded_files.clone());

    let outcome = hook::run(
        &cli.message_file,
        &cfg,
        &changes,
        |api_key| setup::build_client(&cfg, api_key),
        &mut io::stdout(),
    )?;

    if let Outcome::Written(message) = outcome {
        log::info!("Accepted suggestion with {} line(s)", message.lines().count());
    }

    Ok(())
}
