pub mod completion;
pub mod openai;
pub mod prompt_builder;
pub mod prompts;

use crate::error::Result;

/// Trait for talking to a text-completion model.
pub trait CompletionClient {
    /// Submit `prompt` and return a suggestion that passed every acceptance rule.
    fn suggest_commit_message(&self, prompt: &str) -> Result<String>;
}
