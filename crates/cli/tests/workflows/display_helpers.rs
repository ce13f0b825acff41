//! Validation, masking and currency output

use crate::common::cli::scratch_config;
use anyhow::Result;

#[test]
fn test_validate_exit_status() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "validate", "email", "jane@example.com").assert_success()?;
    assert_eq!(out.stdout.trim(), "valid");

    let out = crate::tw!(&config, "validate", "email", "jane@").assert_failure()?;
    assert_eq!(out.exit_code, 1);
    assert_eq!(out.stdout.trim(), "invalid");

    crate::tw!(&config, "validate", "phone", "+1 (555) 123-4567").assert_success()?;
    crate::tw!(&config, "validate", "password", "password").assert_failure()?;

    Ok(())
}

#[test]
fn test_mask() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "mask", "card", "4111 1111 1111 1234").assert_success()?;
    assert_eq!(out.stdout.trim(), "**** **** **** 1234");

    let out = crate::tw!(&config, "mask", "email", "jane@example.com").assert_success()?;
    assert_eq!(out.stdout.trim(), "j***@example.com");

    let out = crate::tw!(&config, "mask", "phone", "555-123-4567").assert_success()?;
    assert_eq!(out.stdout.trim(), "******4567");

    Ok(())
}

#[test]
fn test_currency() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "currency", "123456").assert_success()?;
    assert_eq!(out.stdout.trim(), "$1,234.56");

    let out = crate::tw!(&config, "currency", "-5").assert_success()?;
    assert_eq!(out.stdout.trim(), "-$0.05");

    let out = crate::tw!(
        &config,
        "currency",
        "1500",
        "--symbol",
        "¥",
        "--decimals",
        "0"
    )
    .assert_success()?;
    assert_eq!(out.stdout.trim(), "¥1,500");

    crate::tw!(&config, "currency", "1", "--decimals", "9").assert_failure()?;

    Ok(())
}

#[test]
fn test_currency_from_config() -> Result<()> {
    let (_dir, config) = scratch_config()?;
    std::fs::write(&config, "[display]\ncurrency_symbol = \"€\"\n")?;

    let out = crate::tw!(&config, "currency", "123456").assert_success()?;
    assert_eq!(out.stdout.trim(), "€1,234.56");

    Ok(())
}

#[test]
fn test_currency_decimals_limit_matches_config() -> Result<()> {
    let (_dir, config) = scratch_config()?;

    let out = crate::tw!(&config, "currency", "5", "--decimals", "4").assert_success()?;
    assert_eq!(out.stdout.trim(), "$0.0005");
    let out = crate::tw!(&config, "currency", "5", "--decimals", "5").assert_failure()?;
    assert!(out.contains_stderr("0-4"));

    crate::tw!(&config, "config", "set", "display.currency_decimals", "4").assert_success()?;
    crate::tw!(&config, "config", "set", "display.currency_decimals", "5").assert_failure()?;

    Ok(())
}
