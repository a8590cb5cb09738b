//! Quiz entities.
//!
//! All of these are produced exclusively by the parsers in
//! [`parser`](super::parser) and are immutable once built — constructors are
//! crate-private so an invalid instance cannot be assembled from outside.

use crate::core::trait_key::TraitScores;
use serde::Serialize;

/// Exactly three personality questions, each longer than 20 trimmed
/// characters, in the order the service produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionList(Vec<String>);

impl QuestionList {
    /// Expected number of questions.
    pub const COUNT: usize = 3;

    /// Minimum trimmed length for a usable question, exclusive.
    pub const MIN_CHARS: usize = 20;

    pub(crate) fn new(questions: Vec<String>) -> Self {
        debug_assert_eq!(questions.len(), Self::COUNT);
        Self(questions)
    }

    pub fn questions(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// One answer choice in a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    /// Human-readable answer text.
    pub label: String,
    /// Machine-friendly identifier (e.g. "help_villager").
    pub name: String,
    /// Stat deltas applied when this option is chosen, each in
    /// [`QuizOption::VALUE_MIN`]..=[`QuizOption::VALUE_MAX`].
    pub value: TraitScores,
}

impl QuizOption {
    pub const VALUE_MIN: i64 = -3;
    pub const VALUE_MAX: i64 = 3;
}

/// A moral-dilemma question with exactly four answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl QuizQuestion {
    /// Expected number of options per question.
    pub const OPTION_COUNT: usize = 4;
}

/// Exactly five quiz questions, in service order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuizSet(Vec<QuizQuestion>);

impl QuizSet {
    /// Expected number of questions per set.
    pub const COUNT: usize = 5;

    pub(crate) fn new(questions: Vec<QuizQuestion>) -> Self {
        debug_assert_eq!(questions.len(), Self::COUNT);
        Self(questions)
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.0
    }
}
