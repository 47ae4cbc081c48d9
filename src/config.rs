use crate::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "text-davinci-003";
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/completions";
pub const DEFAULT_MAX_TOKENS: u32 = 256;
pub const DEFAULT_TEMPERATURE: f32 = 0.85;
pub const DEFAULT_MAX_DIFF_CHARS: usize = 10_000;
pub const DEFAULT_DEBUG_PROMPT: &str = ".prompt";
pub const DEFAULT_EXCLUDED_FILES: [&str; 2] = ["package-lock.json", "yarn.lock"];

/// Final resolved configuration for robocommit.
#[derive(Debug, Clone)]
pub struct Config {
    /// May be absent; the hook checks for it only after the skip rule.
    pub openai_api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub max_diff_chars: usize,
    pub debug_prompt: PathBuf,
    pub excluded_files: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config::resolve(None, None, None, FileConfig::default())
    }
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`, ...)
    ///   2. Env vars `ROBOCOMMIT_MODEL` and `OPENAI_API_KEY`
    ///   3. TOML `~/.config/robocommit.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = config_path()
            .and_then(|path| load_file_config(&path))
            .unwrap_or_default();

        Config::resolve(
            Some(cli),
            env::var("ROBOCOMMIT_MODEL").ok(),
            env::var("OPENAI_API_KEY").ok(),
            file_cfg,
        )
    }

    fn resolve(
        cli: Option<&Cli>,
        model_env: Option<String>,
        api_key_env: Option<String>,
        file_cfg: FileConfig,
    ) -> Self {
        let model = cli
            .and_then(|c| c.model.clone())
            .or(model_env)
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let openai_api_key = cli
            .and_then(|c| c.api_key.clone())
            .or(api_key_env)
            .or(file_cfg.openai_api_key)
            .filter(|k| !k.trim().is_empty());

        let endpoint = cli
            .and_then(|c| c.endpoint.clone())
            .or(file_cfg.endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let max_tokens = cli
            .and_then(|c| c.max_tokens)
            .or(file_cfg.max_tokens)
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = cli
            .and_then(|c| c.temperature)
            .or(file_cfg.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE);

        let debug_prompt = cli
            .and_then(|c| c.debug_prompt.clone())
            .or(file_cfg.debug_prompt)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEBUG_PROMPT));

        let excluded_files = file_cfg.excluded_files.unwrap_or_else(|| {
            DEFAULT_EXCLUDED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect()
        });

        Config {
            openai_api_key,
            model,
            endpoint,
            max_tokens,
            temperature,
            max_diff_chars: file_cfg.max_diff_chars.unwrap_or(DEFAULT_MAX_DIFF_CHARS),
            debug_prompt,
            excluded_files,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub endpoint: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub max_diff_chars: Option<usize>,
    pub debug_prompt: Option<PathBuf>,
    /// Staged files left out of the diff, matched by exact name.
    pub excluded_files: Option<Vec<String>>,
}

/// Return `~/.config/robocommit.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("robocommit.toml"))
}

/// Read and parse a config file. Missing, unreadable and malformed files all
/// yield `None`; the last two are logged.
fn load_file_config(path: &Path) -> Option<FileConfig> {
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(path)
        .map_err(|e| log::warn!("Ignoring {}: {}", path.display(), e))
        .ok()?;

    parse_file_config(&data)
        .map_err(|e| log::warn!("Ignoring {}: {}", path.display(), e))
        .ok()
}

fn parse_file_config(data: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str::<FileConfig>(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_the_stock_hook() {
        let cfg = Config::default();

        assert_eq!(cfg.model, "text-davinci-003");
        assert_eq!(cfg.endpoint, "https://api.openai.com/v1/completions");
        assert_eq!(cfg.max_tokens, 256);
        assert_eq!(cfg.temperature, 0.85);
        assert_eq!(cfg.max_diff_chars, 10_000);
        assert_eq!(cfg.debug_prompt, PathBuf::from(".prompt"));
        assert_eq!(cfg.excluded_files, vec!["package-lock.json", "yarn.lock"]);
        assert!(cfg.openai_api_key.is_none());
    }

    #[test]
    fn cli_beats_env_beats_file() {
        let file_cfg = parse_file_config(
            r#"
            model = "from-file"
            max_tokens = 64
            excluded_files = ["Cargo.lock"]
            "#,
        )
        .unwrap();
        let cli = Cli::parse_from(["robocommit", "MSG", "--model", "from-cli"]);

        let cfg = Config::resolve(Some(&cli), Some("from-env".into()), None, file_cfg);

        assert_eq!(cfg.model, "from-cli");
        assert_eq!(cfg.max_tokens, 64);
        assert_eq!(cfg.excluded_files, vec!["Cargo.lock"]);
    }

    #[test]
    fn env_key_beats_file_key() {
        let file_cfg = parse_file_config("openai_api_key = \"file-key\"").unwrap();

        let cfg = Config::resolve(None, Some("from-env".into()), Some("env-key".into()), file_cfg);

        assert_eq!(cfg.model, "from-env");
        assert_eq!(cfg.openai_api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let cfg = Config::resolve(None, None, Some("   ".into()), FileConfig::default());
        assert!(cfg.openai_api_key.is_none());
    }

    #[test]
    fn unreadable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // a directory exists but cannot be read as a file
        let path = dir.path().join("robocommit.toml");
        fs::create_dir(&path).unwrap();

        let file_cfg = load_file_config(&path);
        assert!(file_cfg.is_none());

        let cfg = Config::resolve(None, None, None, file_cfg.unwrap_or_default());
        assert_eq!(cfg.model, DEFAULT_MODEL);
        assert_eq!(cfg.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robocommit.toml");
        fs::write(&path, "model = [unterminated").unwrap();

        assert!(load_file_config(&path).is_none());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_file_config(&dir.path().join("absent.toml")).is_none());
    }

    #[test]
    fn readable_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("robocommit.toml");
        fs::write(&path, "model = \"from-file\"\nmax_diff_chars = 500\n").unwrap();

        let cfg = Config::resolve(None, None, None, load_file_config(&path).unwrap());

        assert_eq!(cfg.model, "from-file");
        assert_eq!(cfg.max_diff_chars, 500);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(parse_file_config("max_tokens = \"lots\"").is_err());
    }
}
