//! Click-delay guards for UI bindings
//!
//! This crate provides:
//! - A debounce gate with a single mutable "last accepted" timestamp
//! - Pluggable time sources (monotonic, wall-clock, chrono, raw millis)
//! - A debounced action binding (one gate + one handler)
//! - A per-key table of independent gates

pub mod debounce;
pub mod guard;
pub mod keyed;
pub mod tick;

// Re-exports
pub use debounce::{DebounceGate, GateConfig, DEFAULT_MIN_INTERVAL_MS};
pub use guard::Debounced;
pub use keyed::GateTable;
pub use tick::Tick;

/// Errors raised while building a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    /// The suppression window was negative
    #[error("invalid configuration: min interval must be >= 0ms (got {0}ms)")]
    InvalidConfiguration(i64),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
