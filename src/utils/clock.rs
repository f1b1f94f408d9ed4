//! Wall-clock abstraction.
//!
//! `date` output and record timestamps read the clock through a trait so
//! tests can pin time instead of tolerating drift.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time.
pub trait Clock {
    /// Current Unix timestamp in seconds.
    fn now_unix(&self) -> u64;
}

/// System wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// Clock pinned to a fixed instant. Intended for tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_unix(&self) -> u64 {
        self.0
    }
}
