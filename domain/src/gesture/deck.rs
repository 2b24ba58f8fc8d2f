//! Per-item gesture bookkeeping for a stack of quiz cards.

use super::swipe::{GesturePhase, SwipeInterpreter, SwipeRelease, SwipeThreshold};
use crate::core::error::DomainError;
use crate::quiz::item::QuizItemId;

/// One [`SwipeInterpreter`] per quiz item.
///
/// When serialized, at most one card is dragged at a time and a released
/// card must settle before it can be dragged again.
#[derive(Debug, Clone)]
pub struct SwipeDeck {
    cards: Vec<(QuizItemId, SwipeInterpreter)>,
    threshold: SwipeThreshold,
    serialized: bool,
}

impl SwipeDeck {
    pub fn new<'a>(
        ids: impl IntoIterator<Item = &'a QuizItemId>,
        threshold: SwipeThreshold,
        serialized: bool,
    ) -> Self {
        let cards = ids
            .into_iter()
            .map(|id| (id.clone(), SwipeInterpreter::new(threshold, serialized)))
            .collect();
        Self {
            cards,
            threshold,
            serialized,
        }
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    pub fn offset(&self, id: &QuizItemId) -> Option<f64> {
        self.card(id).map(|c| c.offset())
    }

    pub fn phase(&self, id: &QuizItemId) -> Option<GesturePhase> {
        self.card(id).map(|c| c.phase())
    }

    /// The card currently being dragged, if any.
    pub fn dragging(&self) -> Option<&QuizItemId> {
        self.cards
            .iter()
            .find(|(_, c)| c.phase() == GesturePhase::Dragging)
            .map(|(id, _)| id)
    }

    pub fn begin(&mut self, id: &QuizItemId) -> Result<(), DomainError> {
        if self.serialized
            && let Some(active) = self.dragging()
            && active != id
        {
            return Err(DomainError::GestureBusy {
                active: active.to_string(),
            });
        }
        if self.card_mut(id)?.begin() {
            Ok(())
        } else {
            Err(DomainError::CardSettling(id.to_string()))
        }
    }

    pub fn update(&mut self, id: &QuizItemId, translation: f64) -> Result<f64, DomainError> {
        self.card_mut(id)?
            .update(translation)
            .ok_or_else(|| DomainError::NotDragging(id.to_string()))
    }

    pub fn end(&mut self, id: &QuizItemId) -> Result<SwipeRelease, DomainError> {
        self.card_mut(id)?
            .end()
            .ok_or_else(|| DomainError::NotDragging(id.to_string()))
    }

    /// Mark the spring-back of `id` as finished. Returns whether the card
    /// was actually settling.
    pub fn settle(&mut self, id: &QuizItemId) -> Result<bool, DomainError> {
        Ok(self.card_mut(id)?.settle())
    }

    fn card(&self, id: &QuizItemId) -> Option<&SwipeInterpreter> {
        self.cards.iter().find(|(cid, _)| cid == id).map(|(_, c)| c)
    }

    fn card_mut(&mut self, id: &QuizItemId) -> Result<&mut SwipeInterpreter, DomainError> {
        self.cards
            .iter_mut()
            .find(|(cid, _)| cid == id)
            .map(|(_, c)| c)
            .ok_or_else(|| DomainError::UnknownItem(id.to_string()))
    }
}
