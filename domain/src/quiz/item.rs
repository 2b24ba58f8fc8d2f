//! Quiz item entity and its answer state.

use crate::gesture::swipe::SwipeDecision;
use serde::{Deserialize, Serialize};

/// Opaque identifier of a quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizItemId(String);

impl QuizItemId {
    /// Creates a QuizItemId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QuizItemId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuizItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tri-state answer of a quiz item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    #[default]
    Unanswered,
    Yes,
    No,
}

impl Answer {
    pub fn is_answered(&self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Unanswered => "unanswered",
            Answer::Yes => "yes",
            Answer::No => "no",
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One yes/no compatibility question (Entity)
///
/// The answer starts as [`Answer::Unanswered`] and can only be moved to
/// `Yes` or `No` through [`QuizItem::record`]. A later decision overwrites
/// an earlier one; nothing resets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    id: QuizItemId,
    title: String,
    question: String,
    answer: Answer,
}

impl QuizItem {
    pub fn new(
        id: impl Into<QuizItemId>,
        title: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            question: question.into(),
            answer: Answer::Unanswered,
        }
    }

    pub fn id(&self) -> &QuizItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    /// Apply a swipe decision, returning the new answer if it changed state.
    ///
    /// `Cancel` leaves the item untouched and returns `None`.
    pub fn record(&mut self, decision: SwipeDecision) -> Option<Answer> {
        let answer = decision.answer()?;
        self.answer = answer;
        Some(answer)
    }
}
