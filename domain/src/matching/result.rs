//! Match result value object

use super::candidate::Candidate;
use super::score::MatchScore;
use serde::{Deserialize, Serialize};

/// Outcome presented after quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    identity: Candidate,
    score: MatchScore,
}

impl MatchResult {
    pub fn new(identity: Candidate, score: MatchScore) -> Self {
        Self { identity, score }
    }

    pub fn identity(&self) -> &Candidate {
        &self.identity
    }

    pub fn score(&self) -> MatchScore {
        self.score
    }
}
