//! System configuration (`config.toml`)
//!
//! Location, in order of precedence:
//! 1. `$TICKWISE_CONFIG`
//! 2. `<config dir>/tickwise/config.toml` (e.g. `~/.config/tickwise/config.toml`)
//!
//! A missing file means all defaults. Missing keys inside a file also take
//! their defaults.

use anyhow::{Context, Result};
use gate::GateConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TICKWISE_CONFIG";

const MAX_MIN_INTERVAL_MS: i64 = 60_000;
/// Upper bound for `display.currency_decimals` and `tw currency --decimals`
pub const MAX_CURRENCY_DECIMALS: u32 = 4;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Every key accepted by `get` / `set`
pub const KEYS: [&str; 6] = [
    "gate.min_interval_ms",
    "display.currency_symbol",
    "display.currency_decimals",
    "display.color",
    "log.level",
    "log.dir",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub gate: GateConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol for `tw currency` (default: "$")
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Minor-unit digits for `tw currency` (default: 2)
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u32,

    /// Colored output when stdout is a terminal (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
            color: true,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is unset (default: "warn")
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rolling log files (default: none)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_decimals() -> u32 {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl SystemConfig {
    /// Check every value against its valid range
    pub fn validate(&self) -> Result<()> {
        self.gate.validate()?;
        if self.gate.min_interval_ms > MAX_MIN_INTERVAL_MS {
            anyhow::bail!(
                "gate.min_interval_ms must be in 0-{} (got {})",
                MAX_MIN_INTERVAL_MS,
                self.gate.min_interval_ms
            );
        }

        if self.display.currency_decimals > MAX_CURRENCY_DECIMALS {
            anyhow::bail!(
                "display.currency_decimals must be in 0-{} (got {})",
                MAX_CURRENCY_DECIMALS,
                self.display.currency_decimals
            );
        }

        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            anyhow::bail!(
                "log.level must be one of {} (got '{}')",
                LOG_LEVELS.join(", "),
                self.log.level
            );
        }

        Ok(())
    }

    /// Read a dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "gate.min_interval_ms" => self.gate.min_interval_ms.to_string(),
            "display.currency_symbol" => self.display.currency_symbol.clone(),
            "display.currency_decimals" => self.display.currency_decimals.to_string(),
            "display.color" => self.display.color.to_string(),
            "log.level" => self.log.level.clone(),
            "log.dir" => self
                .log
                .dir
                .as_ref()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default(),
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'tw config list' to see available keys.",
                key
            ),
        };
        Ok(value)
    }

    /// Write a dotted key (not validated; call `validate` before saving)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "gate.min_interval_ms" => {
                self.gate.min_interval_ms = value
                    .parse()
                    .context("Invalid value: must be an integer number of milliseconds")?;
            }
            "display.currency_symbol" => {
                self.display.currency_symbol = value.to_string();
            }
            "display.currency_decimals" => {
                self.display.currency_decimals = value
                    .parse()
                    .context("Invalid value: must be a non-negative integer")?;
            }
            "display.color" => {
                self.display.color = value
                    .parse()
                    .context("Invalid value: must be 'true' or 'false'")?;
            }
            "log.level" => {
                self.log.level = value.to_ascii_lowercase();
            }
            "log.dir" => {
                self.log.dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => anyhow::bail!(
                "Unknown config key: {}. Use 'tw config list' to see available keys.",
                key
            ),
        }
        Ok(())
    }
}

/// Resolve the config file location
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("tickwise").join("config.toml"))
}

/// Load from the default location (defaults if missing)
pub fn load() -> Result<SystemConfig> {
    match config_file_path() {
        Some(path) => load_from(&path),
        None => Ok(SystemConfig::default()),
    }
}

/// Load from the default location without range checks
///
/// Used by `config set` so a file holding an out-of-range value can still
/// be repaired.
pub fn load_unvalidated() -> Result<SystemConfig> {
    match config_file_path() {
        Some(path) => parse_from(&path),
        None => Ok(SystemConfig::default()),
    }
}

/// Load and validate a specific file (defaults if missing)
pub fn load_from(path: &Path) -> Result<SystemConfig> {
    let config = parse_from(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

/// Parse a specific file (defaults if missing)
pub fn parse_from(path: &Path) -> Result<SystemConfig> {
    if !path.exists() {
        return Ok(SystemConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Save to the default location
pub fn save(config: &SystemConfig) -> Result<()> {
    let path = config_file_path().context("Could not determine config file path")?;
    save_to(config, &path)
}

/// Save to a specific file, creating parent directories
pub fn save_to(config: &SystemConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let serialized = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, serialized)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    Ok(())
}

/// Write a default config if none exists; returns its path
pub fn init_if_missing() -> Result<PathBuf> {
    let path = config_file_path().context("Could not determine config file path")?;
    if !path.exists() {
        save_to(&SystemConfig::default(), &path)?;
    }
    Ok(path)
}

/// Commented example config
pub fn example_config() -> String {
    r#"# tickwise configuration

[gate]
# Minimum spacing between accepted clicks, in milliseconds (0-60000)
min_interval_ms = 300

[display]
# Currency rendering for `tw currency`
currency_symbol = "$"
currency_decimals = 2   # 0-4
# Colored output when stdout is a terminal
color = true

[log]
# trace | debug | info | warn | error (RUST_LOG overrides)
level = "warn"
# Optional directory for daily rolling log files
# dir = "/var/log/tickwise"
"#
    .to_string()
}
