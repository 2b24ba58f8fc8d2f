//! Quiz session aggregate

use super::answer_sheet::{AnswerEntry, AnswerSheet};
use super::item::{Answer, QuizItem, QuizItemId};
use crate::core::error::DomainError;
use crate::gesture::swipe::SwipeDecision;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Ordered, fixed-length set of quiz items (Aggregate Root)
///
/// Items are never added or removed after construction. Once
/// [`close`](Self::close)d the session rejects further decisions.
#[derive(Debug, Clone)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    closed: bool,
}

impl QuizSession {
    pub fn new(items: Vec<QuizItem>) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::EmptyQuiz);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id().clone()) {
                return Err(DomainError::DuplicateItem(item.id().to_string()));
            }
        }
        Ok(Self {
            items,
            closed: false,
        })
    }

    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &QuizItemId> {
        self.items.iter().map(|i| i.id())
    }

    pub fn get(&self, id: &QuizItemId) -> Option<&QuizItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply a decision to the named item.
    ///
    /// Returns the item's new answer, or `None` when the decision was
    /// `Cancel` and nothing changed.
    pub fn apply_decision(
        &mut self,
        id: &QuizItemId,
        decision: SwipeDecision,
    ) -> Result<Option<Answer>, DomainError> {
        if self.closed {
            return Err(DomainError::SessionClosed);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id() == id)
            .ok_or_else(|| DomainError::UnknownItem(id.to_string()))?;
        Ok(item.record(decision))
    }

    /// True when no item is left unanswered.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|i| i.answer().is_answered())
    }

    pub fn answered_count(&self) -> usize {
        self.items.iter().filter(|i| i.answer().is_answered()).count()
    }

    pub fn unanswered(&self) -> Vec<QuizItemId> {
        self.items
            .iter()
            .filter(|i| !i.answer().is_answered())
            .map(|i| i.id().clone())
            .collect()
    }

    /// First unanswered item in display order.
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.items.iter().find(|i| !i.answer().is_answered())
    }

    /// Snapshot the current answers.
    pub fn freeze(&self, submitted_at: DateTime<Utc>) -> AnswerSheet {
        AnswerSheet::new(
            self.items.iter().map(AnswerEntry::from).collect(),
            submitted_at,
        )
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}
