//! JSON question and type-description parser.
//!
//! Loads the two data files and checks them for common issues.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Axis, QuestionSet, TypeCatalog};

/// Parse a question file.
pub fn parse_questions(path: &Path) -> Result<QuestionSet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question file: {}", path.display()))?;

    parse_questions_str(&content, path)
}

/// Parse question JSON (useful for testing).
pub fn parse_questions_str(content: &str, source_path: &Path) -> Result<QuestionSet> {
    let set: QuestionSet = serde_json::from_str(content)
        .with_context(|| format!("failed to parse questions: {}", source_path.display()))?;
    set.check()
        .with_context(|| format!("invalid question data in {}", source_path.display()))?;
    Ok(set)
}

/// Parse a type-description file.
pub fn parse_catalog(path: &Path) -> Result<TypeCatalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read type file: {}", path.display()))?;

    parse_catalog_str(&content, path)
}

/// Parse type-description JSON (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<TypeCatalog> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse type descriptions: {}", source_path.display()))
}

/// A warning from data validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question id (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn question(id: impl ToString, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(id.to_string()),
            message: message.into(),
        }
    }

    fn general(message: impl Into<String>) -> Self {
        Self {
            question_id: None,
            message: message.into(),
        }
    }
}

/// Validate questions and type descriptions for common issues.
///
/// Fatal problems are already rejected by [`QuestionSet::check`] at parse
/// time; these are the ones a session survives.
pub fn validate_quiz(questions: &QuestionSet, catalog: &TypeCatalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for q in questions.iter() {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning::question(&q.id, "prompt is empty"));
        }

        if q.options.len() != 2 {
            warnings.push(ValidationWarning::question(
                &q.id,
                format!("expected 2 options, found {}", q.options.len()),
            ));
        }

        if q.options.iter().any(|o| o.text.trim().is_empty()) {
            warnings.push(ValidationWarning::question(&q.id, "option text is empty"));
        }

        let letters: HashSet<_> = q.letters().into_iter().collect();
        if letters.len() < q.options.len() {
            warnings.push(ValidationWarning::question(
                &q.id,
                "two options score the same letter",
            ));
        }
    }

    for axis in Axis::ALL {
        let measured = questions
            .iter()
            .any(|q| q.options.iter().any(|o| o.letter.axis() == axis));
        if !measured {
            warnings.push(ValidationWarning::general(format!(
                "no question measures the {axis} axis"
            )));
        }
    }

    let missing = catalog.missing_codes();
    if !missing.is_empty() {
        let codes: Vec<String> = missing.iter().map(|c| c.to_string()).collect();
        warnings.push(ValidationWarning::general(format!(
            "no description for type(s): {}",
            codes.join(", ")
        )));
    }

    warnings
}
