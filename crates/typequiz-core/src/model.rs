//! Core data model types for typequiz.
//!
//! Questions, dimension letters, type codes, and the type-description
//! catalog. Everything here is immutable once loaded.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// One of the eight individual trait letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    /// All letters, pairwise in axis order.
    pub const ALL: [Letter; 8] = [
        Letter::E,
        Letter::I,
        Letter::S,
        Letter::N,
        Letter::T,
        Letter::F,
        Letter::J,
        Letter::P,
    ];

    /// The axis this letter belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::EnergyFocus,
            Letter::S | Letter::N => Axis::Perception,
            Letter::T | Letter::F => Axis::Judgment,
            Letter::J | Letter::P => Axis::Lifestyle,
        }
    }

    /// Position of this letter in [`Letter::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The other letter on the same axis.
    pub fn opposite(self) -> Letter {
        let (first, second) = self.axis().letters();
        if self == first {
            second
        } else {
            first
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'E' => Some(Letter::E),
            'I' => Some(Letter::I),
            'S' => Some(Letter::S),
            'N' => Some(Letter::N),
            'T' => Some(Letter::T),
            'F' => Some(Letter::F),
            'J' => Some(Letter::J),
            'P' => Some(Letter::P),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Letter {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::from_char(c).ok_or_else(|| QuizError::InvalidLetter(s.into())),
            _ => Err(QuizError::InvalidLetter(s.into())),
        }
    }
}

impl TryFrom<String> for Letter {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.to_string()
    }
}

/// One of the four personality dimensions, each a pair of opposing letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// E / I
    EnergyFocus,
    /// S / N
    Perception,
    /// T / F
    Judgment,
    /// J / P
    Lifestyle,
}

impl Axis {
    /// All axes in type-code order.
    pub const ALL: [Axis; 4] = [
        Axis::EnergyFocus,
        Axis::Perception,
        Axis::Judgment,
        Axis::Lifestyle,
    ];

    /// The two letters of this axis. The first one wins ties.
    pub fn letters(self) -> (Letter, Letter) {
        match self {
            Axis::EnergyFocus => (Letter::E, Letter::I),
            Axis::Perception => (Letter::S, Letter::N),
            Axis::Judgment => (Letter::T, Letter::F),
            Axis::Lifestyle => (Letter::J, Letter::P),
        }
    }

    /// Position of this axis within a type code.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.letters();
        write!(f, "{first}/{second}")
    }
}

/// A four-letter personality type, one letter per axis in axis order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode([Letter; 4]);

impl TypeCode {
    /// Build a code from four letters; each must sit on the matching axis.
    pub fn new(letters: [Letter; 4]) -> Result<Self, QuizError> {
        let well_formed = letters
            .iter()
            .zip(Axis::ALL)
            .all(|(letter, axis)| letter.axis() == axis);
        if well_formed {
            Ok(Self(letters))
        } else {
            Err(QuizError::InvalidTypeCode(
                letters.iter().map(|l| l.as_char()).collect(),
            ))
        }
    }

    /// The letter chosen on `axis`.
    pub fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }

    pub fn letters(&self) -> [Letter; 4] {
        self.0
    }

    /// Build a code by deciding, per axis, whether its first letter is chosen.
    pub fn from_choices(mut choose_first: impl FnMut(Axis) -> bool) -> Self {
        Self(Axis::ALL.map(|axis| {
            let (first, second) = axis.letters();
            if choose_first(axis) {
                first
            } else {
                second
            }
        }))
    }

    /// Every one of the sixteen possible codes, in lexicographic axis order.
    pub fn all() -> Vec<TypeCode> {
        (0u8..16)
            .map(|bits| TypeCode::from_choices(|axis| bits & (0b1000 >> axis.index()) == 0))
            .collect()
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QuizError::InvalidTypeCode(s.into());
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 4 {
            return Err(invalid());
        }
        let mut letters = [Letter::E; 4];
        for (slot, c) in letters.iter_mut().zip(chars) {
            *slot = Letter::from_char(c).ok_or_else(invalid)?;
        }
        TypeCode::new(letters).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TypeCode {
    type Error = QuizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}

/// Question identifier. Data files may use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawQuestionId", into = "String")]
pub struct QuestionId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuestionId {
    Number(i64),
    Text(String),
}

impl From<RawQuestionId> for QuestionId {
    fn from(raw: RawQuestionId) -> Self {
        match raw {
            RawQuestionId::Number(n) => QuestionId(n.to_string()),
            RawQuestionId::Text(s) => QuestionId(s),
        }
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.0
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        QuestionId(s.to_string())
    }
}

impl From<u32> for QuestionId {
    fn from(n: u32) -> Self {
        QuestionId(n.to_string())
    }
}

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled choice; picking it scores one point for `letter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(rename = "value", alias = "dimension")]
    pub letter: Letter,
}

/// A single forced-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Prompt text shown to the user.
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Whether any option scores for `letter`.
    pub fn offers(&self, letter: Letter) -> bool {
        self.options.iter().any(|o| o.letter == letter)
    }

    /// Letters offered by this question's options, in option order.
    pub fn letters(&self) -> Vec<Letter> {
        self.options.iter().map(|o| o.letter).collect()
    }
}

/// The ordered question collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Display name of the quiz.
    #[serde(default = "default_quiz_name")]
    pub name: String,
    pub questions: Vec<Question>,
}

fn default_quiz_name() -> String {
    "Personality Type Quiz".to_string()
}

impl QuestionSet {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        let set = Self {
            name: name.into(),
            questions,
        };
        set.check()?;
        Ok(set)
    }

    /// Reject sets a session could never complete or score correctly:
    /// no questions, repeated ids, questions without options, or options
    /// split across axes.
    pub fn check(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(&q.id) {
                return Err(QuizError::DuplicateQuestion(q.id.clone()));
            }
            let Some(first) = q.options.first() else {
                return Err(QuizError::NoOptions(q.id.clone()));
            };
            let axis = first.letter.axis();
            if q.options.iter().any(|o| o.letter.axis() != axis) {
                return Err(QuizError::MixedAxes(q.id.clone()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by id.
    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

/// Read-only content describing one personality type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescription {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    /// Suggested careers.
    #[serde(default)]
    pub career: Vec<String>,
}

/// Type descriptions keyed by type code.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeCatalog {
    #[serde(rename = "mbtiTypes", alias = "types")]
    pub types: BTreeMap<TypeCode, TypeDescription>,
}

impl TypeCatalog {
    /// Description for `code`, or [`QuizError::UnknownType`].
    pub fn lookup(&self, code: TypeCode) -> Result<&TypeDescription, QuizError> {
        self.types.get(&code).ok_or(QuizError::UnknownType(code))
    }

    /// Codes among the sixteen that have no description.
    pub fn missing_codes(&self) -> Vec<TypeCode> {
        TypeCode::all()
            .into_iter()
            .filter(|c| !self.types.contains_key(c))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
