//! Debounced action binding
//!
//! Pairs one gate with one handler, mirroring a click listener that
//! ignores repeated taps within the window.

use crate::debounce::DebounceGate;
use crate::tick::Tick;
use crate::Result;
use std::time::Instant;

/// A handler guarded by its own debounce gate
pub struct Debounced<F, T: Tick = Instant> {
    gate: DebounceGate<T>,
    action: F,
}

impl<F: Fn(), T: Tick> Debounced<F, T> {
    /// Bind `action` behind a gate with the default window
    pub fn new(action: F) -> Self {
        Self::with_gate(DebounceGate::new(), action)
    }

    /// Bind `action` behind a window in milliseconds
    pub fn configure(min_interval_ms: i64, action: F) -> Result<Self> {
        let gate = DebounceGate::configure(min_interval_ms)?;
        Ok(Self::with_gate(gate, action))
    }

    /// Bind `action` behind an existing gate
    pub fn with_gate(gate: DebounceGate<T>, action: F) -> Self {
        Self { gate, action }
    }

    /// Fire the handler at `now` if the gate allows it
    pub fn trigger(&self, now: T) -> bool {
        self.gate.attempt(now, || (self.action)())
    }

    /// Underlying gate
    pub fn gate(&self) -> &DebounceGate<T> {
        &self.gate
    }
}

impl<F: Fn()> Debounced<F, Instant> {
    /// Fire the handler using the monotonic clock
    pub fn trigger_now(&self) -> bool {
        self.trigger(Instant::now())
    }
}

impl<F, T: Tick + std::fmt::Debug> std::fmt::Debug for Debounced<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced").field("gate", &self.gate).finish_non_exhaustive()
    }
}
