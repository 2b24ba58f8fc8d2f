//! Match candidates

use serde::{Deserialize, Serialize};

/// A person the quiz can match with (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    display_name: String,
    short_name: String,
    verification_code: String,
}

impl Candidate {
    /// Create a candidate. The verification code is stored lowercased.
    pub fn new(
        display_name: impl Into<String>,
        short_name: impl Into<String>,
        verification_code: impl AsRef<str>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            short_name: short_name.into(),
            verification_code: verification_code.as_ref().trim().to_lowercase(),
        }
    }

    /// Full name shown on the match screen ("James Huang").
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// First name used in prompts ("Go meet James").
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Code their QR badge encodes.
    pub fn verification_code(&self) -> &str {
        &self.verification_code
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// The two people the app currently matches everyone with.
pub fn default_candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("James Huang", "James", "james"),
        Candidate::new("Woody Wang", "Woody", "woody"),
    ]
}
