use crate::error::{HookError, Result};
use colored::Colorize;
use std::process::Command as GitCommand;

/// Added, Copied, Modified, Renamed, Type-changed, Unmerged, eXisting, Broken.
const DIFF_FILTER: &str = "--diff-filter=ACMRTUXB";

/// Read-only view of the staged changes the prompt is built from.
pub trait StagedChanges {
    /// Short status listing, untracked files excluded.
    fn status(&self) -> Result<String>;

    /// Zero-context unified diff of the staged files.
    fn diff(&self) -> Result<String>;
}

/// `StagedChanges` backed by the `git` executable in the current directory.
pub struct GitCli {
    excluded_files: Vec<String>,
}

impl GitCli {
    pub fn new(excluded_files: Vec<String>) -> Self {
        GitCli { excluded_files }
    }

    fn staged_files(&self) -> Result<Vec<String>> {
        let output = git_output(&["diff", "--cached", "--name-only", DIFF_FILTER])?;
        Ok(filter_excluded(&output, &self.excluded_files))
    }
}

impl StagedChanges for GitCli {
    fn status(&self) -> Result<String> {
        git_output(&["status", "--short", "--untracked-files=no"])
    }

    fn diff(&self) -> Result<String> {
        let files = self.staged_files()?;
        if files.is_empty() {
            log::info!("No staged files left after exclusions");
            return Ok(String::new());
        }

        let mut args = vec![
            "diff",
            "--cached",
            "--no-color",
            "--no-ext-diff",
            "--unified=0",
            "--no-prefix",
            "--",
        ];
        args.extend(files.iter().map(String::as_str));

        git_output(&args)
    }
}

/// Run a git command and capture stdout as String.
///
/// Anything git writes to stderr is echoed in red, whether or not it succeeded.
pub fn git_output(args: &[&str]) -> Result<String> {
    log::debug!("Running git {:?}", args);

    let output = GitCommand::new("git")
        .args(args)
        .output()
        .map_err(HookError::GitSpawn)?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        eprintln!("{}", stderr.trim_end().red());
    }

    if !output.status.success() {
        return Err(HookError::Git {
            args: args.join(" "),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Staged file names from `git diff --name-only`, minus exact-name exclusions.
fn filter_excluded(name_only: &str, excluded: &[String]) -> Vec<String> {
    name_only
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !excluded.iter().any(|e| e == l))
        .map(str::to_string)
        .collect()
}

/// Keep the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
