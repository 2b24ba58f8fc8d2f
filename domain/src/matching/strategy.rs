//! Match strategy trait
//!
//! The way a submitted quiz turns into a match is pluggable. The app ships
//! with a random stand-in (see the infrastructure layer); a real scoring
//! algorithm can replace it without touching callers.

use super::candidate::Candidate;
use super::result::MatchResult;
use super::score::MatchScore;
use crate::core::error::DomainError;
use crate::quiz::answer_sheet::AnswerSheet;

/// Trait for turning submitted answers into a match.
pub trait MatchStrategy: Send {
    /// Get the name of this strategy
    fn name(&self) -> &'static str;

    /// Pick a candidate and a score for the given answers.
    ///
    /// `candidates` is never empty when called through the match presenter.
    fn choose(
        &mut self,
        sheet: &AnswerSheet,
        candidates: &[Candidate],
    ) -> Result<MatchResult, DomainError>;
}

/// Always returns the same candidate index and score.
///
/// Useful for demos and tests that need a predictable match.
#[derive(Debug, Clone, Copy)]
pub struct FixedMatchStrategy {
    index: usize,
    score: MatchScore,
}

impl FixedMatchStrategy {
    pub fn new(index: usize, score: MatchScore) -> Self {
        Self { index, score }
    }
}

impl MatchStrategy for FixedMatchStrategy {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn choose(
        &mut self,
        _sheet: &AnswerSheet,
        candidates: &[Candidate],
    ) -> Result<MatchResult, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::NoCandidates);
        }
        let identity = candidates[self.index % candidates.len()].clone();
        Ok(MatchResult::new(identity, self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::candidate::default_candidates;
    use chrono::Utc;

    #[test]
    fn test_fixed_strategy_wraps_index() {
        let mut strategy = FixedMatchStrategy::new(3, MatchScore::new(88).unwrap());
        let sheet = AnswerSheet::new(vec![], Utc::now());
        let result = strategy.choose(&sheet, &default_candidates()).unwrap();
        assert_eq!(result.identity().short_name(), "Woody");
        assert_eq!(result.score().value(), 88);
    }

    #[test]
    fn test_fixed_strategy_without_candidates() {
        let mut strategy = FixedMatchStrategy::new(0, MatchScore::new(88).unwrap());
        let sheet = AnswerSheet::new(vec![], Utc::now());
        assert_eq!(
            strategy.choose(&sheet, &[]).unwrap_err(),
            DomainError::NoCandidates
        );
    }
}
