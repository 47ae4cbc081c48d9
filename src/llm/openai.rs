use super::CompletionClient;
use super::completion::finish_response;
use crate::debug_prompt::DebugPrompt;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::time::Duration;

/// Nucleus sampling mass; always the full distribution.
const TOP_P: f32 = 1.0;

/// Minimal request body for the OpenAI Completions API.
#[derive(Serialize, Debug)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

/// Endpoint and sampling parameters for one client.
#[derive(Debug, Clone)]
pub struct CompletionSettings {
    pub endpoint: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// OpenAI-based implementation of CompletionClient.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    settings: CompletionSettings,
    artifact: DebugPrompt,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        settings: CompletionSettings,
        artifact: DebugPrompt,
    ) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(OpenAiClient {
            client,
            api_key,
            settings,
            artifact,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            prompt,
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
            top_p: TOP_P,
        }
    }

    /// POST the prompt and decode whatever comes back as JSON.
    ///
    /// The HTTP status is not checked; error bodies are JSON too and are
    /// reported by `check_response`.
    fn call_completions(&self, prompt: &str) -> Result<Value> {
        let req = self.request_body(prompt);

        log::info!("Calling OpenAI model {:?} at {}", req.model, self.settings.endpoint);

        let resp = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        log::debug!("OpenAI responded with HTTP {}", status.as_u16());

        Ok(serde_json::from_str(&text)?)
    }
}

impl CompletionClient for OpenAiClient {
    fn suggest_commit_message(&self, prompt: &str) -> Result<String> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message("Getting suggested commit message...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let response = self.call_completions(prompt);
        spinner.finish_and_clear();

        finish_response(&response?, &self.artifact, &mut io::stderr())
    }
}
