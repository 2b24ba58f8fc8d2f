//! Random match stand-in
//!
//! There is no real matching backend: the identity is drawn uniformly from
//! the candidates and the score uniformly from the configured range. A seed
//! makes the draws reproducible.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use spark_application::MatchingParams;
use spark_domain::{
    AnswerSheet, Candidate, DomainError, MatchResult, MatchScore, MatchStrategy, ScoreRange,
};
use tracing::debug;

/// Uniform random [`MatchStrategy`].
pub struct RandomMatchStrategy {
    rng: StdRng,
    range: ScoreRange,
}

impl RandomMatchStrategy {
    pub fn new(range: ScoreRange) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
        }
    }

    pub fn seeded(range: ScoreRange, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    pub fn from_params(params: &MatchingParams) -> Self {
        match params.seed {
            Some(seed) => Self::seeded(params.score_range, seed),
            None => Self::new(params.score_range),
        }
    }
}

impl MatchStrategy for RandomMatchStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(
        &mut self,
        _sheet: &AnswerSheet,
        candidates: &[Candidate],
    ) -> Result<MatchResult, DomainError> {
        let identity = candidates
            .choose(&mut self.rng)
            .cloned()
            .ok_or(DomainError::NoCandidates)?;
        let score = MatchScore::new(self.rng.gen_range(self.range.as_range()))?;
        debug!("Drew {} at {}", identity, score);
        Ok(MatchResult::new(identity, score))
    }
}
