pub mod init;
pub mod render;
pub mod show;
pub mod take;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use typequiz_core::config::{load_config_from, QuizConfig};

/// Load config and apply per-command path overrides.
fn resolve_config(
    config_path: Option<PathBuf>,
    questions: Option<PathBuf>,
    types: Option<PathBuf>,
) -> Result<QuizConfig> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(q) = questions {
        config.questions_path = q;
    }
    if let Some(t) = types {
        config.types_path = t;
    }
    Ok(config)
}
