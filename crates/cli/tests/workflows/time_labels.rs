//! Relative time, calendar day and ordinal output

use crate::common::cli::scratch_config;
use anyhow::Result;

// 2024-01-03 14:30:00 UTC
const NOW_MS: &str = "1704292200000";

#[test]
fn test_ago_buckets() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let cases = [
        ("1704292170000", "Just now"),     // 30s
        ("1704292140000", "1 minute ago"), // 60s
        ("1704286800000", "1 hour ago"),   // 90min
        ("1704112200000", "2 days ago"),   // 50h
    ];

    for (past, expected) in cases {
        let out = crate::tw!(&config, "ago", past, "--now", NOW_MS).assert_success()?;
        assert_eq!(out.lines()[0], expected, "past={}", past);
    }

    Ok(())
}

#[test]
fn test_ago_future_clamps() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "ago", "1704299400000", "--now", NOW_MS).assert_success()?;
    assert_eq!(out.lines()[0], "Just now");

    Ok(())
}

#[test]
fn test_ago_rfc3339_and_absolute_line() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(
        &config,
        "ago",
        "2024-01-03T12:00:00Z",
        "--now",
        "2024-01-03T16:30:00+02:00"
    )
    .assert_success()?;

    assert_eq!(out.lines(), vec!["2 hours ago", "2024-01-03 12:00:00 UTC"]);
    Ok(())
}

#[test]
fn test_ago_json() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "ago", "1704292140000", "--now", NOW_MS, "--json")
        .assert_success()?;
    assert_eq!(out.stdout.trim(), r#"{"kind":"minutes_ago","value":1}"#);

    Ok(())
}

#[test]
fn test_ago_rejects_garbage() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "ago", "last tuesday").assert_failure()?;
    assert!(out.contains_stderr("Invalid timestamp"));

    Ok(())
}

#[test]
fn test_day_labels() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let cases = [
        ("2024-03-01", "Today"),
        ("2024-02-29", "Yesterday"),
        ("2024-03-02", "Tomorrow"),
        ("2023-12-25", "25 Dec 2023"),
    ];

    for (date, expected) in cases {
        let out = crate::tw!(&config, "day", date, "--reference", "2024-03-01").assert_success()?;
        assert_eq!(out.stdout.trim(), expected, "date={}", date);
    }

    let out = crate::tw!(&config, "day", "today").assert_success()?;
    assert_eq!(out.stdout.trim(), "Today");

    Ok(())
}

#[test]
fn test_day_ordinal_and_json() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "day", "2023-12-22", "--ordinal").assert_success()?;
    assert_eq!(out.stdout.trim(), "22nd Dec 2023");

    let out = crate::tw!(
        &config,
        "day",
        "2023-12-31",
        "--reference",
        "2024-01-01",
        "--json"
    )
    .assert_success()?;
    assert_eq!(out.stdout.trim(), r#"{"kind":"yesterday"}"#);

    Ok(())
}

#[test]
fn test_ordinal() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    for (day, expected) in [("1", "1st"), ("12", "12th"), ("23", "23rd"), ("31", "31st")] {
        let out = crate::tw!(&config, "ordinal", day).assert_success()?;
        assert_eq!(out.stdout.trim(), expected);
    }

    let out = crate::tw!(&config, "ordinal", "32").assert_failure()?;
    assert!(out.contains_stderr("1..=31"));

    let out = crate::tw!(&config, "ordinal", "0").assert_failure()?;
    assert!(out.contains_stderr("got 0"));

    Ok(())
}
