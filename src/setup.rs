use log::debug;
use crate::config::Config;
use crate::debug_prompt::DebugPrompt;
use crate::error::Result;
use crate::llm::CompletionClient;
use crate::llm::openai::{CompletionSettings, OpenAiClient};

/// Build the completion client from config and the resolved API key.
pub fn build_client(cfg: &Config, api_key: &str) -> Result<Box<dyn CompletionClient>> {
    debug!("Using OpenAiClient with model: {}", cfg.model);

    let settings = CompletionSettings {
        endpoint: cfg.endpoint.clone(),
        model: cfg.model.clone(),
        max_tokens: cfg.max_tokens,
        temperature: cfg.temperature,
    };

    let client = OpenAiClient::new(
        api_key.to_string(),
        settings,
        DebugPrompt::new(cfg.debug_prompt.clone()),
    )?;

    Ok(Box::new(client))
}
