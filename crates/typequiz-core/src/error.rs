//! Quiz error types.
//!
//! These represent contract violations by the caller of the engine and
//! problems with the question or type data. Loading paths wrap them in
//! `anyhow` with file context; the engine returns them directly.

use thiserror::Error;

use crate::model::{Letter, QuestionId, TypeCode};

/// Errors raised by the quiz engine and data model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No question with this id is loaded.
    #[error("unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// The letter is not one offered by the question's options.
    #[error("letter {letter} is not an option of question {question}")]
    InvalidAnswer { question: QuestionId, letter: Letter },

    /// The current question has no option at this (zero-based) position.
    #[error("no option {} on the current question", .0 + 1)]
    InvalidOption(usize),

    /// The operation is not allowed in the engine's current state.
    #[error("operation not allowed while quiz is {0}")]
    InvalidState(&'static str),

    /// The type catalog has no description for this code.
    #[error("no description for type {0}")]
    UnknownType(TypeCode),

    /// A character that is not one of the eight dimension letters.
    #[error("invalid dimension letter: {0:?}")]
    InvalidLetter(String),

    /// A string that is not a well-formed four-letter type code.
    #[error("invalid type code: {0:?}")]
    InvalidTypeCode(String),

    /// The question file contained no questions.
    #[error("question set is empty")]
    EmptyQuestionSet,

    /// Two questions share an id.
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// A question nobody could answer.
    #[error("question {0} has no options")]
    NoOptions(QuestionId),

    /// A question whose options score on different axes.
    #[error("options of question {0} score on more than one axis")]
    MixedAxes(QuestionId),
}

impl QuizError {
    /// Returns `true` if the error means the session cannot start at all.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            QuizError::EmptyQuestionSet
                | QuizError::DuplicateQuestion(_)
                | QuizError::NoOptions(_)
                | QuizError::MixedAxes(_)
                | QuizError::InvalidLetter(_)
                | QuizError::InvalidTypeCode(_)
        )
    }
}
