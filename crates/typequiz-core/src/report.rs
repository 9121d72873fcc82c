//! Result report types with JSON export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::QuizOutcome;
use crate::error::QuizError;
use crate::model::{TypeCode, TypeDescription};
use crate::scoring::{axis_breakdowns, AxisBreakdown, ScoreTally};
use crate::source::QuizData;

/// Everything the result screen shows for one finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    pub quiz_name: String,
    pub type_code: TypeCode,
    pub description: TypeDescription,
    pub tally: ScoreTally,
    /// Per-axis split in type-code order.
    pub axes: [AxisBreakdown; 4],
    pub answered: usize,
    pub total_questions: usize,
}

impl QuizReport {
    /// Assemble a report for `outcome`.
    ///
    /// Fails with [`QuizError::UnknownType`] when the catalog has no entry
    /// for the derived code.
    pub fn build(outcome: &QuizOutcome, data: &QuizData) -> Result<Self, QuizError> {
        let description = data.catalog.lookup(outcome.type_code)?.clone();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_name: data.questions.name.clone(),
            type_code: outcome.type_code,
            description,
            tally: outcome.tally,
            axes: axis_breakdowns(&outcome.tally),
            answered: outcome.answered,
            total_questions: outcome.total_questions,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
