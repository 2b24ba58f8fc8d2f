//! Configuration validation issues.
//!
//! Config sections report problems as [`ConfigIssue`]s instead of failing
//! on the first one, so every problem in a file surfaces at once.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A string field holds a value outside its known set.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
    /// A numeric field is outside its allowed range.
    OutOfRange { field: String, value: String },
    /// `min_score` is above `max_score`, or either exceeds 100.
    InvalidScoreRange { min: u8, max: u8 },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::OutOfRange {
                field: "quiz.swipe_threshold".to_string(),
                value: "-1".to_string(),
            },
            message: "negative".to_string(),
        };
        assert!(!issue.is_error());
        assert!(
            ConfigIssue {
                severity: Severity::Error,
                ..issue
            }
            .is_error()
        );
    }
}
