//! typequiz configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level typequiz configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Question JSON file.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// Type-description JSON file.
    #[serde(default = "default_types_path")]
    pub types_path: PathBuf,
    /// Pause before revealing the result, in milliseconds.
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,
    /// Output directory for saved results.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default result format: text, json, html, markdown, all.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("data/questions.json")
}
fn default_types_path() -> PathBuf {
    PathBuf::from("data/types.json")
}
fn default_reveal_delay() -> u64 {
    2000
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./typequiz-results")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            types_path: default_types_path(),
            reveal_delay_ms: default_reveal_delay(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

impl QuizConfig {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Apply `TYPEQUIZ_*` environment overrides.
    fn apply_env(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("TYPEQUIZ_QUESTIONS") {
            self.questions_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("TYPEQUIZ_TYPES") {
            self.types_path = PathBuf::from(path);
        }
        if let Ok(delay) = std::env::var("TYPEQUIZ_REVEAL_DELAY_MS") {
            self.reveal_delay_ms = delay
                .trim()
                .parse()
                .with_context(|| format!("invalid TYPEQUIZ_REVEAL_DELAY_MS: '{delay}'"))?;
        }
        Ok(())
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `typequiz.toml` in the current directory
/// 2. `~/.config/typequiz/config.toml`
///
/// Environment variable overrides: `TYPEQUIZ_QUESTIONS`, `TYPEQUIZ_TYPES`,
/// `TYPEQUIZ_REVEAL_DELAY_MS`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("typequiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            parse_config_file(&path)?
        }
        None => QuizConfig::default(),
    };

    config.apply_env()?;
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<QuizConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<QuizConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("typequiz"))
}
