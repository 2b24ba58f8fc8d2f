//! Frozen answer set produced by quiz submission.

use super::item::{Answer, QuizItem, QuizItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a submitted quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub id: QuizItemId,
    pub title: String,
    pub answer: Answer,
}

impl From<&QuizItem> for AnswerEntry {
    fn from(item: &QuizItem) -> Self {
        Self {
            id: item.id().clone(),
            title: item.title().to_string(),
            answer: item.answer(),
        }
    }
}

/// Immutable snapshot of the answers at submission time (Value Object)
///
/// Entries keep session order. This is the record a storage layer may
/// persist and the input a match strategy receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    entries: Vec<AnswerEntry>,
    submitted_at: DateTime<Utc>,
}

impl AnswerSheet {
    pub fn new(entries: Vec<AnswerEntry>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            entries,
            submitted_at,
        }
    }

    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn get(&self, id: &QuizItemId) -> Option<Answer> {
        self.entries.iter().find(|e| &e.id == id).map(|e| e.answer)
    }

    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|e| e.answer.is_answered())
    }

    pub fn count(&self, answer: Answer) -> usize {
        self.entries.iter().filter(|e| e.answer == answer).count()
    }
}
