//! Clock port
//!
//! Debounce windows and submission timestamps read time through this port
//! so tests can drive it by hand.

use chrono::{DateTime, Utc};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Source of monotonic and wall-clock time.
pub trait Clock: Send + Sync {
    /// Monotonic time for measuring intervals.
    fn now(&self) -> Instant;

    /// Wall-clock time for records.
    fn utc_now(&self) -> DateTime<Utc>;
}

/// Clock that only moves when told to.
pub struct ManualClock {
    state: Mutex<(Instant, DateTime<Utc>)>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            state: Mutex::new((Instant::now(), Utc::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut state) = self.state.lock() {
            state.0 += by;
            if let Ok(delta) = chrono::Duration::from_std(by) {
                state.1 += delta;
            }
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        match self.state.lock() {
            Ok(state) => state.0,
            Err(poisoned) => poisoned.into_inner().0,
        }
    }

    fn utc_now(&self) -> DateTime<Utc> {
        match self.state.lock() {
            Ok(state) => state.1,
            Err(poisoned) => poisoned.into_inner().1,
        }
    }
}
