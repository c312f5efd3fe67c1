//! Pause-aware match clock.
//!
//! All fuse, explosion, and match-timer math reads this clock instead of the
//! wall clock. It only advances inside `update` while the match is running
//! and unpaused, so pausing freezes every timer by construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchClock {
    elapsed: Duration,
}

impl MatchClock {
    pub fn new() -> Self {
        MatchClock { elapsed: Duration::ZERO }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Milliseconds of simulated time since match start.
    pub fn now_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
