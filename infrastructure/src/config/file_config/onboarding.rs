//! Onboarding timing from TOML (`[onboarding]` section)

use serde::{Deserialize, Serialize};
use spark_application::OnboardingParams;
use spark_domain::{ConfigIssue, ConfigIssueCode, Severity};
use std::time::Duration;

/// Raw onboarding configuration from TOML
///
/// # Example
///
/// ```toml
/// [onboarding]
/// tagline_interval_ms = 2000
/// splash_ms = 5000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOnboardingConfig {
    pub tagline_interval_ms: u64,
    pub splash_ms: u64,
}

impl Default for FileOnboardingConfig {
    fn default() -> Self {
        Self {
            tagline_interval_ms: 2000,
            splash_ms: 5000,
        }
    }
}

impl FileOnboardingConfig {
    /// A zero tagline interval would spin; it is replaced by the default.
    pub fn parse_tagline_interval(&self) -> (Duration, Vec<ConfigIssue>) {
        if self.tagline_interval_ms > 0 {
            return (Duration::from_millis(self.tagline_interval_ms), vec![]);
        }
        let fallback = OnboardingParams::default().tagline_interval;
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: "onboarding.tagline_interval_ms".to_string(),
                value: self.tagline_interval_ms.to_string(),
            },
            message: format!(
                "onboarding.tagline_interval_ms: must be positive, falling back to {}",
                fallback.as_millis()
            ),
        };
        (fallback, vec![issue])
    }

    pub fn to_params(&self) -> OnboardingParams {
        OnboardingParams {
            tagline_interval: self.parse_tagline_interval().0,
            splash_duration: Duration::from_millis(self.splash_ms),
        }
    }
}
