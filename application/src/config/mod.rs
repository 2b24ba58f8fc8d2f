//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`QuizParams`]: swipe threshold, submission policy, gesture serialization
//! - [`MatchingParams`]: score range and optional seed of the match stand-in
//! - [`VerificationParams`]: scan debounce
//! - [`OnboardingParams`]: tagline cadence and splash length
//! - [`SparkConfig`]: container handed to the controller

pub mod spark_config;

pub use spark_config::{
    MatchingParams, OnboardingParams, QuizParams, SparkConfig, VerificationParams,
};
