//! Error kinds for the hook. Every failure maps to exactly one variant.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("OpenAI suggestion failed: OPENAI_API_KEY not set")]
    MissingCredential,

    #[error("failed to start git")]
    GitSpawn(#[source] std::io::Error),

    #[error("git {args} failed with exit code {code:?}")]
    Git { args: String, code: Option<i32> },

    #[error("failed to access {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to reach the completion endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned malformed JSON")]
    Decode(#[from] serde_json::Error),

    #[error("OpenAI API returned an invalid response: {0}")]
    ApiResponse(String),

    #[error("OpenAI API {reason}:\n{text}")]
    BadCompletion { reason: &'static str, text: String },
}

impl HookError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HookError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = HookError> = std::result::Result<T, E>;
