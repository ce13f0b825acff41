//! Human-readable time labels
//!
//! This crate provides:
//! - Relative labels for instants ("Just now", "3 hours ago")
//! - Calendar-day labels ("Today", "Yesterday", "25 Dec 2023")
//! - Ordinal day suffixes ("1st", "22nd", "13th")
//! - Absolute UTC timestamp rendering
//!
//! Every function is pure apart from the `*_now` / `*_today` wrappers,
//! which read the system clock.

pub mod calendar;
pub mod label;
pub mod ordinal;
pub mod relative;

// Re-exports
pub use calendar::{
    format_absolute_time, format_day_month_year, human_friendly_date, human_friendly_date_today,
};
pub use label::RelativeTimeLabel;
pub use ordinal::{ordinal_date, ordinal_suffix, with_ordinal};
pub use relative::{format_relative_time, relative_from_millis, relative_from_now, relative_to_now};

/// Errors raised by formatting helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Day of month outside 1..=31
    #[error("invalid argument: day of month must be in 1..=31 (got {day})")]
    InvalidArgument { day: u32 },

    /// Unix milliseconds chrono cannot represent
    #[error("timestamp out of range: {0}ms")]
    TimestampOutOfRange(i64),
}

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
