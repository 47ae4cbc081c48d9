use crate::error::{HookError, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Scratch file holding the last prompt and the model's raw reply.
///
/// Written for people to read; robocommit never reads it back.
#[derive(Debug, Clone)]
pub struct DebugPrompt {
    path: PathBuf,
}

impl DebugPrompt {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DebugPrompt { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with `prompt`.
    pub fn write(&self, prompt: &str) -> Result<()> {
        fs::write(&self.path, prompt).map_err(|e| HookError::io(&self.path, e))
    }

    /// Append `text` to the file, creating it if needed.
    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| HookError::io(&self.path, e))?;

        file.write_all(text.as_bytes())
            .map_err(|e| HookError::io(&self.path, e))
    }
}
