//! Submission policy value object

use serde::{Deserialize, Serialize};

/// Whether a quiz may be submitted while some items are still unanswered.
///
/// The app has always let people submit at any time, so that is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Submission is available at all times.
    #[default]
    AllowIncomplete,
    /// Every item must be answered before submitting.
    RequireComplete,
}

impl SubmissionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionPolicy::AllowIncomplete => "allow_incomplete",
            SubmissionPolicy::RequireComplete => "require_complete",
        }
    }

    /// Check whether a quiz in the given completion state may be submitted.
    pub fn permits(&self, complete: bool) -> bool {
        match self {
            SubmissionPolicy::AllowIncomplete => true,
            SubmissionPolicy::RequireComplete => complete,
        }
    }
}

impl std::str::FromStr for SubmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "allow_incomplete" | "allow" => Ok(SubmissionPolicy::AllowIncomplete),
            "require_complete" | "require" => Ok(SubmissionPolicy::RequireComplete),
            other => Err(format!("unknown submission policy: {}", other)),
        }
    }
}

impl std::fmt::Display for SubmissionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
