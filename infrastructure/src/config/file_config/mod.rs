//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Fields hold plain strings and numbers; each section parses them into
//! application types, reporting problems as [`ConfigIssue`]s.

mod matching;
mod onboarding;
mod output;
mod quiz;
mod storage;
mod verification;

pub use matching::FileMatchingConfig;
pub use onboarding::FileOnboardingConfig;
pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;
pub use storage::FileStorageConfig;
pub use verification::FileVerificationConfig;

use serde::{Deserialize, Serialize};
use spark_application::SparkConfig;
use spark_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Swipe quiz settings
    pub quiz: FileQuizConfig,
    /// Match stand-in settings
    pub matching: FileMatchingConfig,
    /// Arrival scan settings
    pub verification: FileVerificationConfig,
    /// Tagline and splash timing
    pub onboarding: FileOnboardingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Answer and friend storage
    pub storage: FileStorageConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.quiz.parse_threshold().1);
        issues.extend(self.quiz.parse_submission().1);
        issues.extend(self.matching.parse_score_range().1);
        issues.extend(self.verification.parse_camera_permission().1);
        issues.extend(self.onboarding.parse_tagline_interval().1);

        issues
    }

    /// Application configuration, with defaults in place of invalid values.
    pub fn to_spark_config(&self) -> SparkConfig {
        SparkConfig {
            quiz: self.quiz.to_params(),
            matching: self.matching.to_params(),
            verification: self.verification.to_params(),
            onboarding: self.onboarding.to_params(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_domain::{Severity, SubmissionPolicy};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[quiz]
swipe_threshold = 120.0
submission = "require"

[matching]
seed = 42
min_score = 80

[verification]
debounce_ms = 1500
camera_permission = "not_determined"

[onboarding]
splash_ms = 0

[output]
color = false

[storage]
answers_path = "answers.jsonl"
friends_path = "friends.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_empty());

        let spark = config.to_spark_config();
        assert_eq!(spark.quiz.swipe_threshold.value(), 120.0);
        assert_eq!(spark.quiz.submission, SubmissionPolicy::RequireComplete);
        assert_eq!(spark.matching.seed, Some(42));
        assert_eq!(spark.matching.score_range.as_range(), 80..=100);
        assert_eq!(spark.verification.debounce, Duration::from_millis(1500));
        assert_eq!(spark.onboarding.splash_duration, Duration::ZERO);
        assert!(!config.output.color);
        assert!(config.storage.answers_path().is_some());
        assert_eq!(
            config.storage.friends_path(),
            Some(std::path::PathBuf::from("friends.jsonl"))
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[quiz]
serialize_gestures = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.quiz.serialize_gestures);
        // Defaults should apply
        assert_eq!(config.quiz.swipe_threshold, 100.0);
        assert_eq!(config.verification.debounce_ms, 1000);
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_every_issue() {
        let toml_str = r#"
[quiz]
swipe_threshold = 0.0
submission = "later"

[matching]
min_score = 101
max_score = 100

[onboarding]
tagline_interval_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count(),
            2
        );

        // Invalid values never leak into the application config.
        let spark = config.to_spark_config();
        assert_eq!(spark.quiz.swipe_threshold.value(), 100.0);
        assert_eq!(spark.matching.score_range.as_range(), 70..=100);
    }
}
