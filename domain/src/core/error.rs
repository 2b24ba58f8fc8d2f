//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Quiz must contain at least one item")]
    EmptyQuiz,

    #[error("Duplicate quiz item id: {0}")]
    DuplicateItem(String),

    #[error("Unknown quiz item: {0}")]
    UnknownItem(String),

    #[error("Quiz session is closed")]
    SessionClosed,

    #[error("Swipe threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("Another card is being dragged: {active}")]
    GestureBusy { active: String },

    #[error("Card {0} is still springing back")]
    CardSettling(String),

    #[error("Card {0} is not being dragged")]
    NotDragging(String),

    #[error("Match score {0} is outside 0..=100")]
    InvalidScore(u8),

    #[error("Invalid score range {min}..={max}")]
    InvalidScoreRange { min: u8, max: u8 },

    #[error("No match candidates configured")]
    NoCandidates,

    #[error("Cannot handle {event} while on the {from} screen")]
    InvalidTransition { from: String, event: String },

    #[error("No friend at position {position} (you have {count})")]
    NoSuchFriend { position: usize, count: usize },
}

impl DomainError {
    /// Check if this error is a gesture conflict that the UI should
    /// silently drop rather than report.
    pub fn is_gesture_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::GestureBusy { .. }
                | DomainError::CardSettling(_)
                | DomainError::NotDragging(_)
        )
    }
}
