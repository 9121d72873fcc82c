//! The `typequiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use typequiz_core::parser;

pub fn execute(
    questions: Option<PathBuf>,
    types: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = super::resolve_config(config_path, questions, types)?;

    let questions = parser::parse_questions(&config.questions_path)?;
    let catalog = parser::parse_catalog(&config.types_path)?;

    println!("Quiz: {} ({} questions)", questions.name, questions.len());
    println!("Type descriptions: {}", catalog.len());

    let warnings = parser::validate_quiz(&questions, &catalog);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz data valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
