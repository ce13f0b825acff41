//! Click timeline replay through the debounce gate

use crate::common::cli::scratch_config;
use anyhow::Result;

#[test]
fn test_replay_with_explicit_window() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(
        &config,
        "debounce",
        "--interval-ms",
        "300",
        "1000",
        "1100",
        "1299",
        "1300",
        "1599",
        "1600"
    )
    .assert_success()?;

    let lines = out.lines();
    assert!(lines[0].starts_with("1000ms") && lines[0].ends_with("accepted"));
    assert!(lines[1].ends_with("suppressed"));
    assert!(lines[3].starts_with("1300ms") && lines[3].ends_with("accepted"));
    assert!(lines[4].ends_with("suppressed"));
    assert!(lines[5].ends_with("accepted"));

    assert_eq!(out.count_verdicts("accepted"), 3);
    assert_eq!(out.count_verdicts("suppressed"), 3);
    assert!(out.contains_stdout("3 of 6 accepted (window 300ms)"));

    Ok(())
}

#[test]
fn test_replay_uses_configured_window() -> Result<()> {
    let (_dir, config) = scratch_config()?;
    std::fs::write(&config, "[gate]\nmin_interval_ms = 1000\n")?;

    let out = crate::tw!(&config, "debounce", "0", "500", "999", "1000").assert_success()?;

    assert_eq!(out.count_verdicts("accepted"), 2);
    assert!(out.contains_stdout("window 1000ms"));

    Ok(())
}

#[test]
fn test_replay_default_window() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "debounce", "0", "299", "300").assert_success()?;

    assert_eq!(out.count_verdicts("accepted"), 2);
    assert!(out.contains_stdout("window 300ms"));

    Ok(())
}

#[test]
fn test_replay_clock_going_backwards() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(
        &config,
        "debounce",
        "--interval-ms",
        "0",
        "5000",
        "4000",
        "5000"
    )
    .assert_success()?;

    let lines = out.lines();
    assert!(lines[0].ends_with("accepted"));
    assert!(lines[1].ends_with("suppressed"));
    assert!(lines[2].ends_with("accepted"));

    Ok(())
}

#[test]
fn test_negative_window_rejected() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "debounce", "--interval-ms", "-5", "0", "1").assert_failure()?;
    assert!(out.contains_stderr("Invalid debounce window"));
    assert!(out.contains_stderr("got -5ms"));

    Ok(())
}
