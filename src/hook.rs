use crate::config::Config;
use crate::debug_prompt::DebugPrompt;
use crate::error::{HookError, Result};
use crate::git::{StagedChanges, truncate_chars};
use crate::llm::CompletionClient;
use crate::llm::prompt_builder;
use colored::Colorize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// What the pre-flight check decided.
#[derive(Debug, PartialEq, Eq)]
pub enum Precondition<'a> {
    /// The message file already has content; leave it alone.
    Skip,
    /// Go ahead with this API key.
    Proceed(&'a str),
}

/// How a hook invocation ended, when it didn't fail.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Written(String),
}

/// Inputs for one prompt, gathered once per invocation.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub model: String,
    pub status: String,
    /// Already truncated to the configured maximum.
    pub diff: String,
}

/// Decide whether the hook should run at all.
///
/// A first line with any non-whitespace content means git (or the user)
/// already supplied a message. A missing file counts as empty.
pub fn check_abort<'a>(
    message_file: &Path,
    api_key: Option<&'a str>,
) -> Result<Precondition<'a>> {
    let existing = match fs::read_to_string(message_file) {
        Ok(s) => s,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(HookError::io(message_file, e)),
    };

    let first_line = existing.lines().next().unwrap_or("");
    if !first_line.trim().is_empty() {
        return Ok(Precondition::Skip);
    }

    match api_key {
        Some(key) => Ok(Precondition::Proceed(key)),
        None => Err(HookError::MissingCredential),
    }
}

pub fn collect_context(
    changes: &dyn StagedChanges,
    model: &str,
    max_diff_chars: usize,
) -> Result<RequestContext> {
    let status = changes.status()?;
    let diff = changes.diff()?;

    let truncated = truncate_chars(&diff, max_diff_chars);
    if truncated.len() < diff.len() {
        log::info!("Diff truncated to {} characters", max_diff_chars);
    }

    Ok(RequestContext {
        model: model.to_string(),
        status,
        diff: truncated.to_string(),
    })
}

/// Build the prompt, ask for a suggestion, and replace the message file with it.
pub fn generate(
    message_file: &Path,
    ctx: &RequestContext,
    artifact: &DebugPrompt,
    client: &dyn CompletionClient,
    out: &mut dyn Write,
) -> Result<String> {
    let prompt = prompt_builder::commit_message_prompt(&ctx.model, &ctx.status, &ctx.diff);
    artifact.write(&prompt)?;
    log::debug!("Prompt saved to {}", artifact.path().display());

    let message = client.suggest_commit_message(&prompt)?;

    match fs::remove_file(message_file) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(HookError::io(message_file, e)),
    }
    fs::write(message_file, &message).map_err(|e| HookError::io(message_file, e))?;

    print_preview(out, message_file, &message).map_err(|e| HookError::io("<stdout>", e))?;

    Ok(message)
}

/// Run the whole hook.
///
/// `connect` turns the API key into a client; it is only called once the
/// staged changes have been collected.
pub fn run<F>(
    message_file: &Path,
    cfg: &Config,
    changes: &dyn StagedChanges,
    connect: F,
    out: &mut dyn Write,
) -> Result<Outcome>
where
    F: FnOnce(&str) -> Result<Box<dyn CompletionClient>>,
{
    let api_key = match check_abort(message_file, cfg.openai_api_key.as_deref())? {
        Precondition::Skip => {
            writeln!(out, "Commit message already exists, exiting")
                .map_err(|e| HookError::io("<stdout>", e))?;
            return Ok(Outcome::Skipped);
        }
        Precondition::Proceed(key) => key,
    };

    let ctx = collect_context(changes, &cfg.model, cfg.max_diff_chars)?;
    let client = connect(api_key)?;
    let artifact = DebugPrompt::new(cfg.debug_prompt.clone());

    let message = generate(message_file, &ctx, &artifact, client.as_ref(), out)?;
    Ok(Outcome::Written(message))
}

fn print_preview(out: &mut dyn Write, message_file: &Path, message: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Wrote suggested commit message to {}", message_file.display())?;
    writeln!(out)?;
    for line in message.lines() {
        writeln!(out, "> {}", line.dimmed())?;
    }
    Ok(())
}
