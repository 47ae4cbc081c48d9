//! Validation of decoded completion responses.
//!
//! These rules are independent of the transport so any `CompletionClient`
//! can run a decoded body through [`finish_response`].

use crate::debug_prompt::DebugPrompt;
use crate::error::{HookError, Result};
use crate::llm::prompts::{BANNED_FIRST_WORD, MARKER};
use colored::Colorize;
use serde_json::Value;
use std::io::Write;

/// Check that `response` carries a `choices` key.
///
/// When it doesn't, the service's error message (or the whole body, pretty
/// printed) is written to `diag` in bold red and returned as `ApiResponse`.
pub fn check_response(response: &Value, diag: &mut dyn Write) -> Result<()> {
    if response.get("choices").is_some() {
        return Ok(());
    }

    let message = match response.get("error") {
        Some(error) => match error.get("message") {
            Some(Value::String(msg)) => msg.clone(),
            Some(other) => other.to_string(),
            None => display_value(error),
        },
        None => serde_json::to_string_pretty(response)?,
    };

    // A broken diagnostic stream must not mask the API error itself.
    if let Err(e) = writeln!(diag, "{}", message.as_str().red().bold()) {
        log::debug!("Could not write API error to diagnostics: {}", e);
    }

    Err(HookError::ApiResponse(message))
}

/// Text of the first choice with surrounding whitespace trimmed.
pub fn extract_completion(response: &Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("text"))
        .and_then(Value::as_str)
        .map(|t| t.trim().to_string())
        .ok_or_else(|| HookError::ApiResponse("no completion text in first choice".into()))
}

/// Apply the marker and anti-generic-prefix rules.
pub fn accept_completion(completion: String) -> Result<String> {
    if !completion.starts_with(MARKER) {
        return Err(HookError::BadCompletion {
            reason: "commit message incorrect header symbol",
            text: completion,
        });
    }

    if completion[MARKER.len()..].starts_with(BANNED_FIRST_WORD) {
        return Err(HookError::BadCompletion {
            reason: "bad commit message",
            text: format!("'{completion}'"),
        });
    }

    Ok(completion)
}

/// Validate a decoded body end to end.
///
/// The extracted text is appended to `artifact` before the acceptance rules
/// run, so rejected completions can still be inspected.
pub fn finish_response(
    response: &Value,
    artifact: &DebugPrompt,
    diag: &mut dyn Write,
) -> Result<String> {
    check_response(response, diag)?;
    let completion = extract_completion(response)?;
    artifact.append(&completion)?;

    log::trace!("Raw completion:\n{}", completion);

    accept_completion(completion)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
