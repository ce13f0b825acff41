//! Relative time label

use serde::{Deserialize, Serialize};
use std::fmt;

/// A short, display-ready description of a time relative to a reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RelativeTimeLabel {
    /// Less than a minute ago (or in the future)
    JustNow,
    /// Whole minutes elapsed (1..=59)
    MinutesAgo(u64),
    /// Whole hours elapsed (1..=23)
    HoursAgo(u64),
    /// Whole days elapsed (>= 1)
    DaysAgo(u64),
    Today,
    Yesterday,
    Tomorrow,
    /// Any other date, rendered as `dd MMM yyyy`
    FormattedDate(String),
}

impl fmt::Display for RelativeTimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JustNow => write!(f, "Just now"),
            Self::MinutesAgo(n) => write!(f, "{} ago", plural(*n, "minute")),
            Self::HoursAgo(n) => write!(f, "{} ago", plural(*n, "hour")),
            Self::DaysAgo(n) => write!(f, "{} ago", plural(*n, "day")),
            Self::Today => write!(f, "Today"),
            Self::Yesterday => write!(f, "Yesterday"),
            Self::Tomorrow => write!(f, "Tomorrow"),
            Self::FormattedDate(s) => write!(f, "{}", s),
        }
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
