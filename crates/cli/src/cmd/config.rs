//! Configuration management command
//!
//! Provides CLI interface to view and edit system configuration.

use crate::util::Palette;
use anyhow::{Context, Result};
use cli_lib::system_config::{self, KEYS, MAX_CURRENCY_DECIMALS};

/// List all configuration values
pub fn run_list(palette: &Palette) -> Result<()> {
    let config = system_config::load()?;
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", palette.heading("System Configuration"));
    println!(
        "{}: {}\n",
        palette.dim("Location"),
        palette.dim(&config_path.display().to_string())
    );

    for key in KEYS {
        let value = config.get(key)?;
        let shown = if value.is_empty() {
            "(unset)".to_string()
        } else {
            value
        };
        println!("  {} = {}", palette.key(key), shown);
    }

    println!("\n{}", palette.heading("Valid Ranges:"));
    println!("  gate.min_interval_ms: 0-60000");
    println!("  display.currency_decimals: 0-{}", MAX_CURRENCY_DECIMALS);
    println!("  log.level: trace, debug, info, warn, error");

    Ok(())
}

/// Get a single configuration value
pub fn run_get(key: &str) -> Result<()> {
    let config = system_config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value
///
/// The file is read without range checks so a bad value can be replaced;
/// the whole config is validated before it is written back.
pub fn run_set(key: &str, value: &str, palette: &Palette) -> Result<()> {
    let mut config = system_config::load_unvalidated()?;
    config.set(key, value)?;

    // Validate before saving
    config.validate().context("Invalid configuration value")?;

    system_config::save(&config)?;

    println!("{} {} = {}", palette.good("✓"), palette.key(key), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub fn run_path(create: bool, palette: &Palette) -> Result<()> {
    let config_path = system_config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        system_config::init_if_missing()?;
        println!("{} Created config file at: {}", palette.good("✓"), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", palette.dim("File does not exist. Use --create to create it."));
    }

    Ok(())
}

/// Show example configuration
pub fn run_example() -> Result<()> {
    print!("{}", system_config::example_config());
    Ok(())
}
