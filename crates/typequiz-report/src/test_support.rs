use chrono::{TimeZone, Utc};

use typequiz_core::model::{Letter, TypeDescription};
use typequiz_core::report::QuizReport;
use typequiz_core::scoring::{axis_breakdowns, derive_type_code, ScoreTally};

pub fn sample_report() -> QuizReport {
    let mut tally = ScoreTally::new();
    for letter in [
        Letter::E,
        Letter::I,
        Letter::I,
        Letter::I,
        Letter::N,
        Letter::N,
        Letter::T,
        Letter::J,
    ] {
        tally.increment(letter);
    }

    QuizReport {
        id: uuid::Uuid::nil(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        quiz_name: "Sample Quiz".into(),
        type_code: derive_type_code(&tally),
        description: TypeDescription {
            name: "Architect".into(),
            keywords: vec!["Imaginative".into(), "Planner".into()],
            description: "Thinks in systems and long-range plans.".into(),
            strengths: vec!["Strategic".into(), "Independent".into()],
            weaknesses: vec!["Overly critical".into()],
            career: vec!["Engineer".into(), "Scientist".into()],
        },
        tally,
        axes: axis_breakdowns(&tally),
        answered: 8,
        total_questions: 8,
    }
}
