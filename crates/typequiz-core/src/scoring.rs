//! Score aggregation and type derivation.
//!
//! The tally is always rebuilt from the recorded answers; it is never
//! updated incrementally while the quiz is in progress.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Axis, Letter, QuestionId, QuestionSet, TypeCode};

/// Recorded answers: question id to chosen letter.
pub type AnswerSet = HashMap<QuestionId, Letter>;

/// Eight counters, one per dimension letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    counts: [u32; 8],
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count recorded for `letter`.
    pub fn get(&self, letter: Letter) -> u32 {
        self.counts[letter.index()]
    }

    pub fn increment(&mut self, letter: Letter) {
        self.counts[letter.index()] += 1;
    }

    /// Both counters of an axis, first letter first.
    pub fn axis(&self, axis: Axis) -> (u32, u32) {
        let (first, second) = axis.letters();
        (self.get(first), self.get(second))
    }

    /// Sum of all eight counters.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    pub fn reset(&mut self) {
        self.counts = [0; 8];
    }

    /// `(letter, count)` pairs in axis order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        Letter::ALL.into_iter().map(|l| (l, self.get(l)))
    }
}

/// Rebuild the tally from `answers`, walking questions in their fixed order.
///
/// Unanswered questions are skipped, as are answers whose question is not in
/// the set.
pub fn compute_scores(questions: &QuestionSet, answers: &AnswerSet) -> ScoreTally {
    let mut tally = ScoreTally::new();
    for question in questions.iter() {
        if let Some(letter) = answers.get(&question.id) {
            tally.increment(*letter);
        }
    }
    tally
}

/// Pick the higher letter on each axis; ties go to the axis's first letter.
pub fn derive_type_code(tally: &ScoreTally) -> TypeCode {
    TypeCode::from_choices(|axis| {
        let (first_count, second_count) = tally.axis(axis);
        first_count >= second_count
    })
}

/// Proportional split of one axis, for bar-chart style display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBreakdown {
    pub axis: Axis,
    pub left: Letter,
    pub right: Letter,
    pub left_count: u32,
    pub right_count: u32,
    /// Share of the left letter in percent; 50 when the axis is empty.
    pub left_percent: f64,
    pub right_percent: f64,
}

impl AxisBreakdown {
    pub fn from_tally(tally: &ScoreTally, axis: Axis) -> Self {
        let (left, right) = axis.letters();
        let (left_count, right_count) = tally.axis(axis);
        let total = left_count + right_count;
        let (left_percent, right_percent) = if total > 0 {
            (
                left_count as f64 / total as f64 * 100.0,
                right_count as f64 / total as f64 * 100.0,
            )
        } else {
            (50.0, 50.0)
        };
        Self {
            axis,
            left,
            right,
            left_count,
            right_count,
            left_percent,
            right_percent,
        }
    }

    /// The letter that the type code shows for this axis.
    pub fn dominant(&self) -> Letter {
        if self.left_count >= self.right_count {
            self.left
        } else {
            self.right
        }
    }
}

/// Breakdown of all four axes in type-code order.
pub fn axis_breakdowns(tally: &ScoreTally) -> [AxisBreakdown; 4] {
    Axis::ALL.map(|axis| AxisBreakdown::from_tally(tally, axis))
}
