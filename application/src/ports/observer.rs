//! Session observer port
//!
//! The rendering layer subscribes to quiz state changes through this trait
//! instead of reading shared mutable fields.

use spark_domain::{Answer, AnswerSheet, QuizItemId};

/// Callback for quiz state changes.
///
/// Every method has a no-op default so renderers only implement what they
/// draw.
pub trait SessionObserver: Send + Sync {
    /// A card moved while being dragged.
    fn on_offset_changed(&self, _id: &QuizItemId, _offset: f64) {}

    /// A card was released and is animating back to the center.
    fn on_spring_back(&self, _id: &QuizItemId, _released_at: f64) {}

    /// An item's answer was set or overwritten.
    fn on_answer_changed(&self, _id: &QuizItemId, _answer: Answer) {}

    /// Completion flipped (all answered ↔ some unanswered).
    fn on_completion_changed(&self, _complete: bool) {}

    /// The answers were frozen.
    fn on_submitted(&self, _sheet: &AnswerSheet) {}
}

/// No-op observer for when nothing renders the quiz.
pub struct NoObserver;

impl SessionObserver for NoObserver {}
