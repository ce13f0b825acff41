//! Time sources accepted by a gate
//!
//! A gate never reads the clock itself: callers pass `now` on every attempt.
//! Any type implementing [`Tick`] can be used, as long as one gate is always
//! fed the same kind of timestamp.

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant, SystemTime};

/// A point in time that can measure the distance to an earlier point
pub trait Tick: Copy {
    /// Time elapsed since `earlier`, or `None` if `self` precedes `earlier`
    fn elapsed_since(self, earlier: Self) -> Option<Duration>;
}

impl Tick for Instant {
    fn elapsed_since(self, earlier: Self) -> Option<Duration> {
        self.checked_duration_since(earlier)
    }
}

impl Tick for SystemTime {
    fn elapsed_since(self, earlier: Self) -> Option<Duration> {
        self.duration_since(earlier).ok()
    }
}

impl Tick for DateTime<Utc> {
    fn elapsed_since(self, earlier: Self) -> Option<Duration> {
        // to_std() fails for negative deltas
        self.signed_duration_since(earlier).to_std().ok()
    }
}

/// Raw Unix milliseconds
impl Tick for u64 {
    fn elapsed_since(self, earlier: Self) -> Option<Duration> {
        self.checked_sub(earlier).map(Duration::from_millis)
    }
}
