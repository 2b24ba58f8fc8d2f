//! Matching domain.
//!
//! - [`candidate::Candidate`]: someone a quiz can be matched with
//! - [`score::MatchScore`] / [`score::ScoreRange`]: bounded percentage scores
//! - [`result::MatchResult`]: identity + score shown after submission
//! - [`strategy::MatchStrategy`]: pluggable way of producing a result

pub mod candidate;
pub mod result;
pub mod score;
pub mod strategy;
