//! Match stand-in configuration from TOML (`[matching]` section)

use serde::{Deserialize, Serialize};
use spark_application::MatchingParams;
use spark_domain::{ConfigIssue, ConfigIssueCode, ScoreRange, Severity};

/// Raw matching configuration from TOML
///
/// # Example
///
/// ```toml
/// [matching]
/// seed = 42        # fixed seed for reproducible matches
/// min_score = 70
/// max_score = 100
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMatchingConfig {
    pub seed: Option<u64>,
    pub min_score: u8,
    pub max_score: u8,
}

impl Default for FileMatchingConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_score: ScoreRange::DEFAULT_MIN,
            max_score: ScoreRange::DEFAULT_MAX,
        }
    }
}

impl FileMatchingConfig {
    pub fn parse_score_range(&self) -> (ScoreRange, Vec<ConfigIssue>) {
        match ScoreRange::new(self.min_score, self.max_score) {
            Ok(range) => (range, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidScoreRange {
                        min: self.min_score,
                        max: self.max_score,
                    },
                    message: format!(
                        "matching: score range {}..={} must satisfy min <= max <= 100",
                        self.min_score, self.max_score
                    ),
                };
                (ScoreRange::default(), vec![issue])
            }
        }
    }

    pub fn to_params(&self) -> MatchingParams {
        MatchingParams {
            score_range: self.parse_score_range().0,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_range() {
        let params = FileMatchingConfig::default().to_params();
        assert_eq!(params.score_range.as_range(), 70..=100);
        assert!(params.seed.is_none());
    }

    #[test]
    fn test_inverted_range_falls_back() {
        let config = FileMatchingConfig {
            seed: Some(7),
            min_score: 90,
            max_score: 80,
        };
        let (range, issues) = config.parse_score_range();
        assert_eq!(range, ScoreRange::default());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::InvalidScoreRange { min: 90, max: 80 }
        );
        assert_eq!(config.to_params().seed, Some(7));
    }
}
