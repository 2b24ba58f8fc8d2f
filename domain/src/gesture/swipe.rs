//! Swipe gesture interpretation.
//!
//! A card follows the finger horizontally while dragged. Only the release
//! produces a decision: past the threshold to the right is `Yes`, past it to
//! the left is `No`, anything in between is `Cancel`. Every release springs
//! the card back to the center.

use crate::core::error::DomainError;
use crate::quiz::item::Answer;
use serde::{Deserialize, Serialize};

/// Discrete outcome of a released swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDecision {
    Yes,
    No,
    Cancel,
}

impl SwipeDecision {
    /// The answer this decision records, if any.
    pub fn answer(self) -> Option<Answer> {
        match self {
            SwipeDecision::Yes => Some(Answer::Yes),
            SwipeDecision::No => Some(Answer::No),
            SwipeDecision::Cancel => None,
        }
    }
}

/// Minimum absolute drag distance that registers a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SwipeThreshold(f64);

impl SwipeThreshold {
    pub const DEFAULT: f64 = 100.0;

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Map a release offset to a decision. Both bounds are exclusive.
    pub fn decide(&self, offset: f64) -> SwipeDecision {
        if offset > self.0 {
            SwipeDecision::Yes
        } else if offset < -self.0 {
            SwipeDecision::No
        } else {
            SwipeDecision::Cancel
        }
    }
}

impl TryFrom<f64> for SwipeThreshold {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SwipeThreshold> for f64 {
    fn from(threshold: SwipeThreshold) -> Self {
        threshold.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Lifecycle of a single card's gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    /// Released and animating back to center.
    Settling,
}

/// What a release produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRelease {
    pub decision: SwipeDecision,
    /// Offset at the moment of release (before the reset to 0).
    pub released_at: f64,
}

/// Per-card drag state machine.
///
/// With `serialized` set, a card that was released must be
/// [`settle`](Self::settle)d before it accepts a new drag. Without it a new
/// drag may start mid spring-back.
#[derive(Debug, Clone)]
pub struct SwipeInterpreter {
    threshold: SwipeThreshold,
    offset: f64,
    phase: GesturePhase,
    serialized: bool,
}

impl SwipeInterpreter {
    pub fn new(threshold: SwipeThreshold, serialized: bool) -> Self {
        Self {
            threshold,
            offset: 0.0,
            phase: GesturePhase::Idle,
            serialized,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    /// Start (or continue) a drag. Returns false if the card is still
    /// settling and gestures are serialized.
    pub fn begin(&mut self) -> bool {
        match self.phase {
            GesturePhase::Dragging => true,
            GesturePhase::Settling if self.serialized => false,
            GesturePhase::Idle | GesturePhase::Settling => {
                self.phase = GesturePhase::Dragging;
                self.offset = 0.0;
                true
            }
        }
    }

    /// Report the cumulative translation of the drag in progress.
    ///
    /// Returns the offset to render, or `None` when no drag is in progress.
    /// Non-finite input leaves the offset where it was.
    pub fn update(&mut self, translation: f64) -> Option<f64> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        if translation.is_finite() {
            self.offset = translation;
        }
        Some(self.offset)
    }

    /// Release the drag. The offset always returns to 0.
    pub fn end(&mut self) -> Option<SwipeRelease> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        let released_at = self.offset;
        let decision = self.threshold.decide(released_at);
        self.offset = 0.0;
        self.phase = if self.serialized {
            GesturePhase::Settling
        } else {
            GesturePhase::Idle
        };
        Some(SwipeRelease {
            decision,
            released_at,
        })
    }

    /// Acknowledge that the spring-back animation finished.
    pub fn settle(&mut self) -> bool {
        if self.phase == GesturePhase::Settling {
            self.phase = GesturePhase::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(interpreter: &mut SwipeInterpreter, path: &[f64]) -> SwipeRelease {
        assert!(interpreter.begin());
        for &dx in path {
            interpreter.update(dx);
        }
        interpreter.end().unwrap()
    }

    #[test]
    fn test_threshold_validation() {
        assert!(SwipeThreshold::new(0.0).is_err());
        assert!(SwipeThreshold::new(-5.0).is_err());
        assert!(SwipeThreshold::new(f64::NAN).is_err());
        assert_eq!(SwipeThreshold::new(42.0).unwrap().value(), 42.0);
        assert_eq!(SwipeThreshold::default().value(), 100.0);
    }

    #[test]
    fn test_threshold_deserialize_validates() {
        assert!(serde_json::from_str::<SwipeThreshold>("0.0").is_err());
        assert!(serde_json::from_str::<SwipeThreshold>("-20.0").is_err());
        let threshold: SwipeThreshold = serde_json::from_str("80.0").unwrap();
        assert_eq!(threshold.value(), 80.0);
    }

    #[test]
    fn test_past_right_threshold_is_yes() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        for end in [100.5, 150.0, 1_000.0] {
            let release = drag(&mut i, &[10.0, 60.0, end]);
            assert_eq!(release.decision, SwipeDecision::Yes);
            assert_eq!(i.offset(), 0.0);
        }
    }

    #[test]
    fn test_past_left_threshold_is_no() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        for end in [-100.5, -250.0] {
            let release = drag(&mut i, &[-30.0, end]);
            assert_eq!(release.decision, SwipeDecision::No);
            assert_eq!(i.offset(), 0.0);
        }
    }

    #[test]
    fn test_within_threshold_is_cancel() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        for end in [-100.0, -42.0, 0.0, 99.9, 100.0] {
            let release = drag(&mut i, &[end]);
            assert_eq!(release.decision, SwipeDecision::Cancel, "offset {end}");
            assert_eq!(i.offset(), 0.0);
        }
    }

    #[test]
    fn test_only_final_offset_matters() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        let release = drag(&mut i, &[300.0, 20.0]);
        assert_eq!(release.decision, SwipeDecision::Cancel);
        assert_eq!(release.released_at, 20.0);
    }

    #[test]
    fn test_update_reports_offset_without_decision() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        assert_eq!(i.update(50.0), None);
        i.begin();
        assert_eq!(i.update(150.0), Some(150.0));
        assert_eq!(i.update(f64::INFINITY), Some(150.0));
        assert_eq!(i.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn test_end_without_drag_is_none() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), true);
        assert!(i.end().is_none());
    }

    #[test]
    fn test_serialized_card_waits_for_settle() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), true);
        drag(&mut i, &[120.0]);
        assert_eq!(i.phase(), GesturePhase::Settling);
        assert!(!i.begin());
        assert!(i.settle());
        assert!(!i.settle());
        assert!(i.begin());
    }

    #[test]
    fn test_unserialized_card_redrags_immediately() {
        let mut i = SwipeInterpreter::new(SwipeThreshold::default(), false);
        drag(&mut i, &[120.0]);
        assert_eq!(i.phase(), GesturePhase::Idle);
        assert!(i.begin());
    }

    #[test]
    fn test_custom_threshold() {
        let threshold = SwipeThreshold::new(40.0).unwrap();
        assert_eq!(threshold.decide(41.0), SwipeDecision::Yes);
        assert_eq!(threshold.decide(-41.0), SwipeDecision::No);
        assert_eq!(threshold.decide(40.0), SwipeDecision::Cancel);
    }
}
