//! Use case parameters.
//!
//! These are application-layer concerns assembled by the infrastructure
//! config loader (or built directly in tests).

use spark_domain::{ScoreRange, SubmissionPolicy, SwipeThreshold};
use std::time::Duration;

/// Quiz interaction parameters.
#[derive(Debug, Clone)]
pub struct QuizParams {
    pub swipe_threshold: SwipeThreshold,
    pub submission: SubmissionPolicy,
    /// Guard against re-dragging a card before it settles.
    pub serialize_gestures: bool,
}

impl Default for QuizParams {
    fn default() -> Self {
        Self {
            swipe_threshold: SwipeThreshold::default(),
            submission: SubmissionPolicy::default(),
            serialize_gestures: true,
        }
    }
}

impl QuizParams {
    pub fn with_submission(mut self, policy: SubmissionPolicy) -> Self {
        self.submission = policy;
        self
    }

    pub fn with_threshold(mut self, threshold: SwipeThreshold) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_serialized_gestures(mut self, serialize: bool) -> Self {
        self.serialize_gestures = serialize;
        self
    }
}

/// Match stand-in parameters.
#[derive(Debug, Clone, Default)]
pub struct MatchingParams {
    pub score_range: ScoreRange,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
}

/// Arrival verification parameters.
#[derive(Debug, Clone)]
pub struct VerificationParams {
    pub debounce: Duration,
}

impl Default for VerificationParams {
    fn default() -> Self {
        Self {
            debounce: Duration::from_secs(1),
        }
    }
}

/// Onboarding/splash timing.
#[derive(Debug, Clone)]
pub struct OnboardingParams {
    pub tagline_interval: Duration,
    pub splash_duration: Duration,
}

impl Default for OnboardingParams {
    fn default() -> Self {
        Self {
            tagline_interval: Duration::from_secs(2),
            splash_duration: Duration::from_secs(5),
        }
    }
}

/// Everything the app controller needs to know about configuration.
#[derive(Debug, Clone, Default)]
pub struct SparkConfig {
    pub quiz: QuizParams,
    pub matching: MatchingParams,
    pub verification: VerificationParams,
    pub onboarding: OnboardingParams,
}
