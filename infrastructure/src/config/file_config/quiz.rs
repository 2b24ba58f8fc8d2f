//! Quiz configuration from TOML (`[quiz]` section)

use serde::{Deserialize, Serialize};
use spark_application::QuizParams;
use spark_domain::{ConfigIssue, ConfigIssueCode, Severity, SubmissionPolicy, SwipeThreshold};

/// Raw quiz configuration from TOML
///
/// # Example
///
/// ```toml
/// [quiz]
/// swipe_threshold = 100.0          # points past center that count as an answer
/// submission = "allow_incomplete"  # or "require_complete"
/// serialize_gestures = true        # ignore re-drags until the card settles
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    pub swipe_threshold: f64,
    pub submission: String,
    pub serialize_gestures: bool,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: SwipeThreshold::DEFAULT,
            submission: SubmissionPolicy::default().as_str().to_string(),
            serialize_gestures: true,
        }
    }
}

impl FileQuizConfig {
    /// Parse the swipe threshold. Non-positive or non-finite values are an
    /// error and fall back to the default.
    pub fn parse_threshold(&self) -> (SwipeThreshold, Vec<ConfigIssue>) {
        match SwipeThreshold::new(self.swipe_threshold) {
            Ok(threshold) => (threshold, vec![]),
            Err(e) => {
                let issue = ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::OutOfRange {
                        field: "quiz.swipe_threshold".to_string(),
                        value: self.swipe_threshold.to_string(),
                    },
                    message: format!("quiz.swipe_threshold: {}", e),
                };
                (SwipeThreshold::default(), vec![issue])
            }
        }
    }

    /// Parse the submission policy
    ///
    /// Accepts: "allow_incomplete", "allow", "require_complete", "require"
    pub fn parse_submission(&self) -> (SubmissionPolicy, Vec<ConfigIssue>) {
        match self.submission.parse::<SubmissionPolicy>() {
            Ok(policy) => (policy, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "quiz.submission".to_string(),
                        value: self.submission.clone(),
                        valid_values: vec![
                            "allow_incomplete".to_string(),
                            "require_complete".to_string(),
                        ],
                    },
                    message: format!(
                        "quiz.submission: unknown value '{}', falling back to 'allow_incomplete'",
                        self.submission
                    ),
                };
                (SubmissionPolicy::default(), vec![issue])
            }
        }
    }

    pub fn to_params(&self) -> QuizParams {
        QuizParams::default()
            .with_threshold(self.parse_threshold().0)
            .with_submission(self.parse_submission().0)
            .with_serialized_gestures(self.serialize_gestures)
    }
}
