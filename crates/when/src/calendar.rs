//! Calendar-day labels and absolute formatting

use crate::label::RelativeTimeLabel;
use crate::{FormatError, Result};
use chrono::{DateTime, Local, NaiveDate, Utc};

/// Label `target` relative to the `reference` day
///
/// Adjacent days become `Yesterday` / `Tomorrow`; anything further away
/// is rendered as `dd MMM yyyy`.
pub fn human_friendly_date(target: NaiveDate, reference: NaiveDate) -> RelativeTimeLabel {
    if target == reference {
        RelativeTimeLabel::Today
    } else if reference.pred_opt() == Some(target) {
        RelativeTimeLabel::Yesterday
    } else if reference.succ_opt() == Some(target) {
        RelativeTimeLabel::Tomorrow
    } else {
        RelativeTimeLabel::FormattedDate(format_day_month_year(target))
    }
}

/// Label `target` relative to today in the local timezone
pub fn human_friendly_date_today(target: NaiveDate) -> RelativeTimeLabel {
    human_friendly_date(target, Local::now().date_naive())
}

/// Render as `dd MMM yyyy` (e.g. "05 Jan 2024")
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Format Unix-millisecond timestamp as absolute UTC time ("2024-01-03 14:30:00")
pub fn format_absolute_time(ts_ms: i64) -> Result<String> {
    let datetime = DateTime::<Utc>::from_timestamp_millis(ts_ms)
        .ok_or(FormatError::TimestampOutOfRange(ts_ms))?;

    Ok(datetime.format("%Y-%m-%d %H:%M:%S").to_string())
}
