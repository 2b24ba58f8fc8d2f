//! Debounced scan verifier

use super::code::matches_candidate;
use crate::matching::candidate::Candidate;
use std::time::{Duration, Instant};

/// What happened to a single scan callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Arrived within the debounce window of the previous scan; ignored.
    Debounced,
    /// Evaluated, not the target's code.
    Rejected,
    /// Evaluated, matched, and flipped the verifier to verified.
    Verified,
    /// Evaluated and matched, but the verifier was already verified.
    AlreadyVerified,
}

impl ScanOutcome {
    /// Whether the scan was evaluated at all.
    pub fn was_evaluated(&self) -> bool {
        !matches!(self, ScanOutcome::Debounced)
    }
}

/// Verification state for one "I'm here" attempt.
///
/// Any scan closer than `debounce` to the previously evaluated scan is
/// dropped. The debounce clock restarts on every evaluated scan, matching
/// or not. `verified` only ever moves from false to true.
#[derive(Debug, Clone)]
pub struct ScanVerifier {
    target: Candidate,
    debounce: Duration,
    last_scan: Option<Instant>,
    verified: bool,
}

impl ScanVerifier {
    pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

    pub fn new(target: Candidate, debounce: Duration) -> Self {
        Self {
            target,
            debounce,
            last_scan: None,
            verified: false,
        }
    }

    pub fn target(&self) -> &Candidate {
        &self.target
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn on_scan(&mut self, scanned: &str, now: Instant) -> ScanOutcome {
        if let Some(last) = self.last_scan
            && now.saturating_duration_since(last) < self.debounce
        {
            return ScanOutcome::Debounced;
        }
        self.last_scan = Some(now);

        if !matches_candidate(scanned, &self.target) {
            return ScanOutcome::Rejected;
        }
        if self.verified {
            ScanOutcome::AlreadyVerified
        } else {
            self.verified = true;
            ScanOutcome::Verified
        }
    }
}
