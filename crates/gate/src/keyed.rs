//! Per-key debounce gates
//!
//! One independent gate per binding key (button id, list row, path...).
//! Gates are created lazily on first attempt and never influence each other.

use crate::debounce::{DebounceGate, GateConfig};
use crate::tick::Tick;
use crate::Result;
use dashmap::DashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::debug;

/// Table of independent gates sharing one window
pub struct GateTable<K, T: Tick = Instant> {
    min_interval: Duration,
    gates: DashMap<K, DebounceGate<T>>,
}

impl<K: Eq + Hash, T: Tick> GateTable<K, T> {
    /// Create an empty table from a validated config
    pub fn new(config: &GateConfig) -> Result<Self> {
        Ok(Self::with_interval(config.min_interval()?))
    }

    /// Create an empty table with an explicit window
    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            min_interval,
            gates: DashMap::new(),
        }
    }

    /// Attempt `action` for `key` at time `now`
    pub fn attempt<F: FnOnce()>(&self, key: K, now: T, action: F) -> bool {
        // Shard guard must be released before the action runs
        let accepted = {
            let gate = self
                .gates
                .entry(key)
                .or_insert_with(|| DebounceGate::with_interval(self.min_interval));
            gate.try_accept(now)
        };

        if accepted {
            action();
        }
        accepted
    }

    /// Last accepted timestamp for `key`
    pub fn last_accepted(&self, key: &K) -> Option<T> {
        self.gates.get(key).and_then(|gate| gate.last_accepted())
    }

    /// Drop the gate for a destroyed binding
    pub fn remove(&self, key: &K) -> bool {
        let removed = self.gates.remove(key).is_some();
        if removed {
            debug!("Removed debounce gate for binding");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
