//! Asynchronous loading of quiz content.
//!
//! Question and type content is loaded once at startup. A session cannot
//! begin without it: every failure here is fatal for the session.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::engine::QuizEngine;
use crate::model::{QuestionSet, TypeCatalog};
use crate::parser;

/// Where question and type content comes from.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Human-readable description of the source, for logs and errors.
    fn describe(&self) -> String;

    async fn load_questions(&self) -> Result<QuestionSet>;

    async fn load_catalog(&self) -> Result<TypeCatalog>;
}

/// Reads both JSON files from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    questions_path: PathBuf,
    types_path: PathBuf,
}

impl FileSource {
    pub fn new(questions_path: impl Into<PathBuf>, types_path: impl Into<PathBuf>) -> Self {
        Self {
            questions_path: questions_path.into(),
            types_path: types_path.into(),
        }
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    pub fn types_path(&self) -> &Path {
        &self.types_path
    }
}

#[async_trait]
impl QuizSource for FileSource {
    fn describe(&self) -> String {
        format!(
            "{} + {}",
            self.questions_path.display(),
            self.types_path.display()
        )
    }

    async fn load_questions(&self) -> Result<QuestionSet> {
        let content = tokio::fs::read_to_string(&self.questions_path)
            .await
            .with_context(|| {
                format!(
                    "failed to read question file: {}",
                    self.questions_path.display()
                )
            })?;
        parser::parse_questions_str(&content, &self.questions_path)
    }

    async fn load_catalog(&self) -> Result<TypeCatalog> {
        let content = tokio::fs::read_to_string(&self.types_path)
            .await
            .with_context(|| format!("failed to read type file: {}", self.types_path.display()))?;
        parser::parse_catalog_str(&content, &self.types_path)
    }
}

/// In-memory JSON content, for embedding data in a binary or in tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    questions_json: String,
    types_json: String,
}

impl StaticSource {
    pub fn new(questions_json: impl Into<String>, types_json: impl Into<String>) -> Self {
        Self {
            questions_json: questions_json.into(),
            types_json: types_json.into(),
        }
    }
}

#[async_trait]
impl QuizSource for StaticSource {
    fn describe(&self) -> String {
        "built-in content".to_string()
    }

    async fn load_questions(&self) -> Result<QuestionSet> {
        parser::parse_questions_str(&self.questions_json, Path::new("<static questions>"))
    }

    async fn load_catalog(&self) -> Result<TypeCatalog> {
        parser::parse_catalog_str(&self.types_json, Path::new("<static types>"))
    }
}

/// Loaded, immutable quiz content.
#[derive(Debug, Clone)]
pub struct QuizData {
    pub questions: Arc<QuestionSet>,
    pub catalog: Arc<TypeCatalog>,
}

impl QuizData {
    /// A fresh engine over these questions.
    pub fn engine(&self) -> Result<QuizEngine> {
        Ok(QuizEngine::new(Arc::clone(&self.questions))?)
    }
}

/// Load questions and type descriptions concurrently.
pub async fn load_quiz(source: &dyn QuizSource) -> Result<QuizData> {
    let (questions, catalog) = tokio::try_join!(source.load_questions(), source.load_catalog())
        .with_context(|| format!("failed to load quiz data from {}", source.describe()))?;

    tracing::info!(
        "loaded {} questions and {} type descriptions from {}",
        questions.len(),
        catalog.len(),
        source.describe()
    );
    let missing = catalog.missing_codes();
    if !missing.is_empty() {
        tracing::warn!("{} type code(s) have no description", missing.len());
    }

    Ok(QuizData {
        questions: Arc::new(questions),
        catalog: Arc::new(catalog),
    })
}
