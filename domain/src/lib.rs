//! Domain layer for spark-connect
//!
//! This crate contains the core rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Swipe quiz
//!
//! A quiz is a fixed list of yes/no questions shown as cards. Dragging a
//! card past the swipe threshold to the right answers "yes", to the left
//! answers "no"; anything shorter springs back without an answer.
//!
//! ## Match & verification
//!
//! A submitted quiz becomes a [`MatchResult`] through a pluggable
//! [`MatchStrategy`]. Meeting the match is confirmed by scanning the QR code
//! they carry, debounced by [`ScanVerifier`]. Verified matches are kept on
//! the friends tab as a [`FriendList`].

pub mod core;
pub mod flow;
pub mod friends;
pub mod gesture;
pub mod matching;
pub mod onboarding;
pub mod quiz;
pub mod verification;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use crate::core::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use flow::screen::{AppFlow, NavEvent, Screen};
pub use friends::{Friend, FriendList};
pub use gesture::{
    deck::SwipeDeck,
    swipe::{GesturePhase, SwipeDecision, SwipeInterpreter, SwipeRelease, SwipeThreshold},
};
pub use matching::{
    candidate::{Candidate, default_candidates},
    result::MatchResult,
    score::{MatchScore, ScoreRange},
    strategy::{FixedMatchStrategy, MatchStrategy},
};
pub use onboarding::{meeting_point::MeetingPoint, tagline::TaglineRotation};
pub use quiz::{
    answer_sheet::{AnswerEntry, AnswerSheet},
    catalog::default_items,
    item::{Answer, QuizItem, QuizItemId},
    policy::SubmissionPolicy,
    session::QuizSession,
};
pub use verification::{
    code::{matches_candidate, normalize_code},
    verifier::{ScanOutcome, ScanVerifier},
};
