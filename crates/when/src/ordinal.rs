//! Ordinal day suffixes ("1st", "22nd", "13th")

use crate::{FormatError, Result};
use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of month
///
/// Only `1..=31` is accepted. 11, 12 and 13 take "th" before the last-digit
/// rule is applied.
pub fn ordinal_suffix(day: u32) -> Result<&'static str> {
    if !(1..=31).contains(&day) {
        return Err(FormatError::InvalidArgument { day });
    }

    let suffix = match day {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    Ok(suffix)
}

/// Day number with its suffix ("21st")
pub fn with_ordinal(day: u32) -> Result<String> {
    Ok(format!("{}{}", day, ordinal_suffix(day)?))
}

/// Date with an ordinal day ("25th Dec 2023")
pub fn ordinal_date(date: NaiveDate) -> String {
    // chrono guarantees day() is in 1..=31
    let suffix = ordinal_suffix(date.day()).unwrap_or("th");
    format!("{}{} {}", date.day(), suffix, date.format("%b %Y"))
}
