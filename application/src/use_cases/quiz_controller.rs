//! Quiz session controller
//!
//! Owns the quiz session and the per-card gesture state, turns drag
//! releases into answers, and freezes the answers on submit.

use crate::config::QuizParams;
use crate::ports::answer_store::{AnswerStore, NoAnswerStore};
use crate::ports::clock::Clock;
use crate::ports::observer::SessionObserver;
use spark_domain::{
    Answer, AnswerSheet, DomainError, GesturePhase, QuizItem, QuizItemId, QuizSession,
    SubmissionPolicy, SwipeDeck, SwipeDecision, SwipeRelease,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur when submitting a quiz
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("{} question(s) still unanswered", .unanswered.len())]
    Incomplete { unanswered: Vec<QuizItemId> },

    #[error("Quiz was already submitted")]
    AlreadySubmitted,
}

/// Controller for one quiz session
pub struct QuizController {
    session: QuizSession,
    deck: SwipeDeck,
    policy: SubmissionPolicy,
    observer: Arc<dyn SessionObserver>,
    clock: Arc<dyn Clock>,
    store: Arc<dyn AnswerStore>,
}

impl QuizController {
    pub fn new(
        items: Vec<QuizItem>,
        params: &QuizParams,
        observer: Arc<dyn SessionObserver>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let session = QuizSession::new(items)?;
        let deck = SwipeDeck::new(
            session.ids(),
            params.swipe_threshold,
            params.serialize_gestures,
        );
        info!(
            "Quiz started with {} items (threshold {}, policy {})",
            session.len(),
            params.swipe_threshold.value(),
            params.submission
        );
        Ok(Self {
            session,
            deck,
            policy: params.submission,
            observer,
            clock,
            store: Arc::new(NoAnswerStore),
        })
    }

    pub fn with_answer_store(mut self, store: Arc<dyn AnswerStore>) -> Self {
        self.store = store;
        self
    }

    pub fn items(&self) -> &[QuizItem] {
        self.session.items()
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn answered_count(&self) -> usize {
        self.session.answered_count()
    }

    pub fn current_item(&self) -> Option<&QuizItem> {
        self.session.current_item()
    }

    pub fn is_submitted(&self) -> bool {
        self.session.is_closed()
    }

    pub fn offset(&self, id: &QuizItemId) -> Option<f64> {
        self.deck.offset(id)
    }

    pub fn gesture_phase(&self, id: &QuizItemId) -> Option<GesturePhase> {
        self.deck.phase(id)
    }

    /// First card, in quiz order, with a drag in progress.
    pub fn dragging(&self) -> Option<&QuizItemId> {
        self.deck.dragging()
    }

    // ==================== Gestures ====================

    pub fn begin_drag(&mut self, id: &QuizItemId) -> Result<(), DomainError> {
        self.ensure_open()?;
        self.deck.begin(id).inspect_err(|e| {
            if e.is_gesture_conflict() {
                debug!("Drag on {} ignored: {}", id, e);
            }
        })
    }

    /// Report drag progress. Only feeds the observer; never answers.
    pub fn update_drag(&mut self, id: &QuizItemId, translation: f64) -> Result<f64, DomainError> {
        self.ensure_open()?;
        let offset = self.deck.update(id, translation)?;
        self.observer.on_offset_changed(id, offset);
        Ok(offset)
    }

    /// Release the drag, apply its decision, and spring the card back.
    pub fn end_drag(&mut self, id: &QuizItemId) -> Result<SwipeRelease, DomainError> {
        self.ensure_open()?;
        let release = self.deck.end(id)?;
        debug!(
            "Card {} released at {:.1} -> {:?}",
            id, release.released_at, release.decision
        );
        self.apply_decision(id, release.decision)?;
        self.observer.on_offset_changed(id, 0.0);
        self.observer.on_spring_back(id, release.released_at);
        Ok(release)
    }

    /// Spring-back animation of `id` finished.
    pub fn settle(&mut self, id: &QuizItemId) -> Result<(), DomainError> {
        self.deck.settle(id)?;
        Ok(())
    }

    // ==================== Answers ====================

    /// Set an item's answer. `Cancel` is a no-op; re-answering overwrites.
    pub fn apply_decision(
        &mut self,
        id: &QuizItemId,
        decision: SwipeDecision,
    ) -> Result<Option<Answer>, DomainError> {
        let was_complete = self.session.is_complete();
        let answer = self.session.apply_decision(id, decision)?;
        if let Some(answer) = answer {
            info!("Answered {} = {}", id, answer);
            self.observer.on_answer_changed(id, answer);
            let complete = self.session.is_complete();
            if complete != was_complete {
                self.observer.on_completion_changed(complete);
            }
        }
        Ok(answer)
    }

    /// Freeze the answers.
    ///
    /// Under [`SubmissionPolicy::RequireComplete`] this fails while any item
    /// is unanswered. The sheet is handed to the answer store; a store
    /// failure is logged and otherwise ignored.
    pub fn submit(&mut self) -> Result<AnswerSheet, SubmitError> {
        if self.session.is_closed() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.policy.permits(self.session.is_complete()) {
            return Err(SubmitError::Incomplete {
                unanswered: self.session.unanswered(),
            });
        }

        let sheet = self.session.freeze(self.clock.utc_now());
        self.session.close();
        info!(
            "Quiz submitted: {}/{} answered",
            self.session.answered_count(),
            self.session.len()
        );

        if let Err(e) = self.store.save(&sheet) {
            warn!("Could not store submitted answers: {}", e);
        }
        self.observer.on_submitted(&sheet);
        Ok(sheet)
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.session.is_closed() {
            Err(DomainError::SessionClosed)
        } else {
            Ok(())
        }
    }
}
