//! The quiz state machine.
//!
//! Owns the current question index, the recorded answers, and the score
//! tally. Rendering lives elsewhere: front-ends call the operations here and
//! read state back, or subscribe through a [`QuizObserver`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Letter, Question, QuestionId, QuestionSet, TypeCode};
use crate::scoring::{self, AnswerSet, ScoreTally};

/// Where the engine is in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    NotStarted,
    InProgress { index: usize },
    /// The last question was passed; waiting for [`QuizEngine::finish`].
    Scoring,
    ResultReady(TypeCode),
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::NotStarted => "not started",
            QuizState::InProgress { .. } => "in progress",
            QuizState::Scoring => "scoring",
            QuizState::ResultReady(_) => "finished",
        }
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizState::InProgress { index } => write!(f, "in progress (question {})", index + 1),
            QuizState::ResultReady(code) => write!(f, "finished ({code})"),
            other => f.write_str(other.name()),
        }
    }
}

/// What happened on a forward navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextOutcome {
    /// Moved to the question at this index.
    Advanced(usize),
    /// The current question has no answer yet.
    Blocked,
    /// Passed the last question; the engine is now in [`QuizState::Scoring`].
    ReadyToScore,
    /// Not in progress, nothing to do.
    Unchanged,
}

/// The scored result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub type_code: TypeCode,
    pub tally: ScoreTally,
    pub answered: usize,
    pub total_questions: usize,
}

/// Receives engine events. All methods are called synchronously.
pub trait QuizObserver: Send + Sync {
    fn on_question_changed(&self, index: usize, question: &Question);
    fn on_answer_recorded(&self, question: &QuestionId, letter: Letter);
    fn on_scoring_complete(&self, outcome: &QuizOutcome);
}

/// No-op observer.
pub struct NoopObserver;

impl QuizObserver for NoopObserver {
    fn on_question_changed(&self, _: usize, _: &Question) {}
    fn on_answer_recorded(&self, _: &QuestionId, _: Letter) {}
    fn on_scoring_complete(&self, _: &QuizOutcome) {}
}

/// A single quiz session over a loaded question set.
pub struct QuizEngine {
    questions: Arc<QuestionSet>,
    state: QuizState,
    answers: AnswerSet,
    tally: ScoreTally,
    observer: Arc<dyn QuizObserver>,
}

impl QuizEngine {
    /// Create an engine in [`QuizState::NotStarted`].
    ///
    /// Fails on any set [`QuestionSet::check`] rejects.
    pub fn new(questions: Arc<QuestionSet>) -> Result<Self, QuizError> {
        questions.check()?;
        Ok(Self {
            questions,
            state: QuizState::NotStarted,
            answers: AnswerSet::new(),
            tally: ScoreTally::new(),
            observer: Arc::new(NoopObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn QuizObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Begin a fresh session at the first question.
    pub fn start(&mut self) {
        self.clear();
        self.state = QuizState::InProgress { index: 0 };
        tracing::debug!("quiz started with {} questions", self.questions.len());
        self.notify_question_changed(0);
    }

    /// Drop all progress and go back to [`QuizState::NotStarted`].
    pub fn restart(&mut self) {
        self.clear();
        self.state = QuizState::NotStarted;
        tracing::debug!("quiz reset");
    }

    fn clear(&mut self) {
        self.answers.clear();
        self.tally.reset();
    }

    /// Record `letter` as the answer to `question_id`, replacing any earlier one.
    pub fn select_answer(
        &mut self,
        question_id: &QuestionId,
        letter: Letter,
    ) -> Result<(), QuizError> {
        if !matches!(self.state, QuizState::InProgress { .. }) {
            return Err(QuizError::InvalidState(self.state.name()));
        }
        let question = self
            .questions
            .find(question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.clone()))?;
        if !question.offers(letter) {
            return Err(QuizError::InvalidAnswer {
                question: question_id.clone(),
                letter,
            });
        }

        self.answers.insert(question_id.clone(), letter);
        tracing::debug!("question {question_id} answered {letter}");
        self.observer.on_answer_recorded(question_id, letter);
        Ok(())
    }

    /// Answer the current question with its option at `option_index`.
    pub fn select_option(&mut self, option_index: usize) -> Result<Letter, QuizError> {
        let question = self
            .current_question()
            .ok_or(QuizError::InvalidState(self.state.name()))?;
        let id = question.id.clone();
        let letter = question
            .options
            .get(option_index)
            .map(|o| o.letter)
            .ok_or(QuizError::InvalidOption(option_index))?;
        self.select_answer(&id, letter)?;
        Ok(letter)
    }

    /// Step back one question. Returns `false` when already at the first
    /// question or not in progress.
    pub fn go_to_previous(&mut self) -> bool {
        match self.state {
            QuizState::InProgress { index } if index > 0 => {
                self.state = QuizState::InProgress { index: index - 1 };
                self.notify_question_changed(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Step forward, or enter [`QuizState::Scoring`] from the last question.
    pub fn go_to_next(&mut self) -> NextOutcome {
        let QuizState::InProgress { index } = self.state else {
            return NextOutcome::Unchanged;
        };
        let Some(current) = self.questions.get(index) else {
            return NextOutcome::Unchanged;
        };
        if !self.is_answered(&current.id) {
            return NextOutcome::Blocked;
        }

        if index + 1 < self.questions.len() {
            self.state = QuizState::InProgress { index: index + 1 };
            self.notify_question_changed(index + 1);
            NextOutcome::Advanced(index + 1)
        } else {
            self.state = QuizState::Scoring;
            tracing::debug!("last question passed, scoring");
            NextOutcome::ReadyToScore
        }
    }

    /// Score the session and move to [`QuizState::ResultReady`].
    ///
    /// Only valid in [`QuizState::Scoring`].
    pub fn finish(&mut self) -> Result<QuizOutcome, QuizError> {
        if self.state != QuizState::Scoring {
            return Err(QuizError::InvalidState(self.state.name()));
        }
        self.compute_scores();
        let type_code = self.derive_type_code();
        self.state = QuizState::ResultReady(type_code);

        let outcome = QuizOutcome {
            type_code,
            tally: self.tally,
            answered: self.answered_count(),
            total_questions: self.questions.len(),
        };
        tracing::info!(
            "quiz complete: {type_code} ({}/{} answered)",
            outcome.answered,
            outcome.total_questions
        );
        self.observer.on_scoring_complete(&outcome);
        Ok(outcome)
    }

    /// Rebuild the tally from the recorded answers.
    pub fn compute_scores(&mut self) -> ScoreTally {
        self.tally = scoring::compute_scores(&self.questions, &self.answers);
        self.tally
    }

    /// Type code for the current tally.
    pub fn derive_type_code(&self) -> TypeCode {
        scoring::derive_type_code(&self.tally)
    }

    pub fn is_answered(&self, question_id: &QuestionId) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn answer_for(&self, question_id: &QuestionId) -> Option<Letter> {
        self.answers.get(question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Current question index, if a question is showing.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { index } => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Fraction of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        match self.state {
            QuizState::NotStarted => 0.0,
            QuizState::InProgress { index } => (index + 1) as f64 / self.questions.len() as f64,
            QuizState::Scoring | QuizState::ResultReady(_) => 1.0,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.current_index(), Some(i) if i > 0)
    }

    /// Whether forward navigation is currently allowed.
    pub fn can_go_next(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.is_answered(&q.id))
    }

    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// The derived type once the result is ready.
    pub fn type_code(&self) -> Option<TypeCode> {
        match self.state {
            QuizState::ResultReady(code) => Some(code),
            _ => None,
        }
    }

    fn notify_question_changed(&self, index: usize) {
        if let Some(question) = self.questions.get(index) {
            self.observer.on_question_changed(index, question);
        }
    }
}
