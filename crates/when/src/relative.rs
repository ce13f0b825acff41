//! Relative labels for instants ("3 hours ago")

use crate::label::RelativeTimeLabel;
use chrono::{DateTime, Utc};
use tracing::debug;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Label `past` relative to `now`
///
/// Buckets truncate: 59s is "Just now", 60s is 1 minute, 90 minutes is
/// 1 hour, 50 hours is 2 days. A `past` later than `now` (clock skew) is
/// clamped to `JustNow`.
pub fn relative_from_now(past: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTimeLabel {
    bucket(now.signed_duration_since(past).num_milliseconds())
}

/// Label `past` relative to the current system time
pub fn relative_to_now(past: DateTime<Utc>) -> RelativeTimeLabel {
    relative_from_now(past, Utc::now())
}

/// Label a Unix-millisecond timestamp relative to another
pub fn relative_from_millis(past_ms: i64, now_ms: i64) -> RelativeTimeLabel {
    bucket(now_ms.saturating_sub(past_ms))
}

/// Format Unix-millisecond timestamp as relative time ("2 hours ago")
pub fn format_relative_time(ts_ms: i64) -> String {
    relative_from_millis(ts_ms, Utc::now().timestamp_millis()).to_string()
}

fn bucket(elapsed_ms: i64) -> RelativeTimeLabel {
    if elapsed_ms < 0 {
        debug!(
            elapsed_ms,
            "timestamp is in the future, clamping to just now"
        );
        return RelativeTimeLabel::JustNow;
    }

    if elapsed_ms < MINUTE_MS {
        RelativeTimeLabel::JustNow
    } else if elapsed_ms < HOUR_MS {
        RelativeTimeLabel::MinutesAgo((elapsed_ms / MINUTE_MS) as u64)
    } else if elapsed_ms < DAY_MS {
        RelativeTimeLabel::HoursAgo((elapsed_ms / HOUR_MS) as u64)
    } else {
        RelativeTimeLabel::DaysAgo((elapsed_ms / DAY_MS) as u64)
    }
}
