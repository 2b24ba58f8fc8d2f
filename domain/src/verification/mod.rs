//! Arrival verification domain.
//!
//! - [`code`]: case-insensitive code comparison
//! - [`verifier::ScanVerifier`]: debounced scan evaluation

pub mod code;
pub mod verifier;
