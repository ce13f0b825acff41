//! Debounce gate
//!
//! Suppresses rapid repeated triggering of an action. The first attempt is
//! always accepted; later attempts are accepted only once the configured
//! window has elapsed since the last accepted one.

use crate::tick::Tick;
use crate::{GateError, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::trace;

/// Default suppression window in milliseconds
pub const DEFAULT_MIN_INTERVAL_MS: i64 = 300;

/// Gate configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Minimum spacing between accepted attempts (default: 300ms)
    ///
    /// Signed so that a negative value in a config file is reported
    /// instead of failing to parse.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: i64,
}

impl GateConfig {
    /// Reject negative windows
    pub fn validate(&self) -> Result<()> {
        if self.min_interval_ms < 0 {
            return Err(GateError::InvalidConfiguration(self.min_interval_ms));
        }
        Ok(())
    }

    /// Validated window as a `Duration`
    pub fn min_interval(&self) -> Result<Duration> {
        self.validate()?;
        Ok(Duration::from_millis(self.min_interval_ms as u64))
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: DEFAULT_MIN_INTERVAL_MS,
        }
    }
}

fn default_min_interval_ms() -> i64 {
    DEFAULT_MIN_INTERVAL_MS
}

/// Debounce gate for a single binding
///
/// Holds the timestamp of the last accepted attempt behind a mutex so the
/// check-and-update in [`attempt`](Self::attempt) is atomic. A gate can be
/// shared across threads (e.g. behind an `Arc`); two racing attempts can
/// never both be accepted inside one window.
#[derive(Debug)]
pub struct DebounceGate<T: Tick = Instant> {
    min_interval: Duration,
    last_accepted: Mutex<Option<T>>,
}

impl<T: Tick> DebounceGate<T> {
    /// Create a gate with the default 300ms window
    pub fn new() -> Self {
        Self::with_interval(Duration::from_millis(DEFAULT_MIN_INTERVAL_MS as u64))
    }

    /// Create a gate from a window in milliseconds
    ///
    /// Returns `InvalidConfiguration` if `min_interval_ms` is negative.
    pub fn configure(min_interval_ms: i64) -> Result<Self> {
        Self::from_config(&GateConfig { min_interval_ms })
    }

    /// Create a gate from a validated config
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        Ok(Self::with_interval(config.min_interval()?))
    }

    /// Create a gate with an explicit window
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: Mutex::new(None),
        }
    }

    /// Suppression window
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Timestamp of the last accepted attempt, if any
    pub fn last_accepted(&self) -> Option<T> {
        *self.last_accepted.lock()
    }

    /// Check-and-update without running an action
    ///
    /// Returns true (and records `now`) when the attempt is accepted.
    /// A `now` earlier than the last accepted timestamp is rejected, so the
    /// recorded timestamp never moves backwards.
    pub fn try_accept(&self, now: T) -> bool {
        let mut last = self.last_accepted.lock();

        let accepted = match *last {
            None => true,
            Some(prev) => match now.elapsed_since(prev) {
                Some(elapsed) => elapsed >= self.min_interval,
                None => {
                    trace!("debounce: attempt precedes last accepted timestamp");
                    false
                }
            },
        };

        if accepted {
            *last = Some(now);
        }

        trace!(accepted, window_ms = self.min_interval.as_millis() as u64, "debounce attempt");
        accepted
    }

    /// Attempt to run `action` at time `now`
    ///
    /// The action runs after the lock is released, so calling back into
    /// the same gate from inside it is rejected rather than deadlocking.
    pub fn attempt<F: FnOnce()>(&self, now: T, action: F) -> bool {
        let accepted = self.try_accept(now);
        if accepted {
            action();
        }
        accepted
    }
}

impl DebounceGate<Instant> {
    /// Attempt using the monotonic clock
    pub fn attempt_now<F: FnOnce()>(&self, action: F) -> bool {
        self.attempt(Instant::now(), action)
    }
}

impl<T: Tick> Default for DebounceGate<T> {
    fn default() -> Self {
        Self::new()
    }
}
