//! Match score value objects

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Percentage score of a match, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidScore(value))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Fraction of the progress ring to fill.
    pub fn fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Inclusive bounds a score generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScoreRange")]
pub struct ScoreRange {
    min: u8,
    max: u8,
}

impl ScoreRange {
    pub const DEFAULT_MIN: u8 = 70;
    pub const DEFAULT_MAX: u8 = 100;

    pub fn new(min: u8, max: u8) -> Result<Self, DomainError> {
        if min <= max && max <= MatchScore::MAX {
            Ok(Self { min, max })
        } else {
            Err(DomainError::InvalidScoreRange { min, max })
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn contains(&self, score: MatchScore) -> bool {
        self.as_range().contains(&score.value())
    }

    pub fn as_range(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

#[derive(Deserialize)]
struct RawScoreRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawScoreRange> for ScoreRange {
    type Error = DomainError;

    fn try_from(raw: RawScoreRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}
