//! Scanned code matching

use crate::matching::candidate::Candidate;

/// Normalize raw scanner text for comparison.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// True iff the scanned text is the target's verification code.
///
/// Comparison is case-insensitive. Anything else (other people's codes,
/// garbage, empty payloads) is simply not a match.
pub fn matches_candidate(scanned: &str, target: &Candidate) -> bool {
    let code = normalize_code(scanned);
    !code.is_empty() && code == target.verification_code()
}
