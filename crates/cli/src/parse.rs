//! Argument parsing for timestamps and dates

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Parse Unix milliseconds, RFC 3339, or `now`
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("now") {
        return Ok(Utc::now());
    }

    if let Ok(ms) = input.parse::<i64>() {
        return DateTime::<Utc>::from_timestamp_millis(ms)
            .with_context(|| format!("Timestamp out of range: {}", ms));
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| {
            format!(
                "Invalid timestamp '{}': expected Unix milliseconds or RFC 3339",
                input
            )
        })
}

/// Parse `YYYY-MM-DD` or `today`
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", input))
}
