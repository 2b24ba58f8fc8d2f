//! Where a match is asked to meet.

use serde::{Deserialize, Serialize};

/// A labelled map region (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingPoint {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Latitude/longitude delta of the visible map region.
    pub span: f64,
}

impl Default for MeetingPoint {
    fn default() -> Self {
        Self {
            label: "San Francisco, CA".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            span: 0.05,
        }
    }
}
