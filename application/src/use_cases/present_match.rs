//! Present Match use case
//!
//! Turns a submitted answer sheet into the match shown on the destination
//! screen, through whatever [`MatchStrategy`] is plugged in.

use spark_domain::{AnswerSheet, Candidate, DomainError, MatchResult, MatchStrategy};
use tracing::info;

/// Use case for producing a match from submitted answers
pub struct MatchPresenter {
    strategy: Box<dyn MatchStrategy>,
    candidates: Vec<Candidate>,
}

impl MatchPresenter {
    pub fn new(
        strategy: Box<dyn MatchStrategy>,
        candidates: Vec<Candidate>,
    ) -> Result<Self, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::NoCandidates);
        }
        Ok(Self {
            strategy,
            candidates,
        })
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn present(&mut self, sheet: &AnswerSheet) -> Result<MatchResult, DomainError> {
        let result = self.strategy.choose(sheet, &self.candidates)?;
        info!(
            "Matched with {} ({}) via {} strategy",
            result.identity(),
            result.score(),
            self.strategy.name()
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use spark_domain::{FixedMatchStrategy, MatchScore, default_candidates};

    #[test]
    fn test_requires_candidates() {
        let strategy = Box::new(FixedMatchStrategy::new(0, MatchScore::new(90).unwrap()));
        assert!(matches!(
            MatchPresenter::new(strategy, vec![]),
            Err(DomainError::NoCandidates)
        ));
    }

    #[test]
    fn test_present_uses_strategy() {
        let strategy = Box::new(FixedMatchStrategy::new(1, MatchScore::new(77).unwrap()));
        let mut presenter = MatchPresenter::new(strategy, default_candidates()).unwrap();
        let sheet = AnswerSheet::new(vec![], Utc::now());
        let result = presenter.present(&sheet).unwrap();
        assert_eq!(result.identity().display_name(), "Woody Wang");
        assert_eq!(result.score().value(), 77);
        assert_eq!(presenter.strategy_name(), "fixed");
    }
}
