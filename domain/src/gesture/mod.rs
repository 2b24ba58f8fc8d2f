//! Swipe gesture domain.
//!
//! - [`swipe::SwipeInterpreter`]: drag offset → [`swipe::SwipeDecision`] for one card
//! - [`deck::SwipeDeck`]: interpreters for every card of a quiz, with
//!   optional per-item serialization of gestures

pub mod deck;
pub mod swipe;
