//! Tickwise CLI - tw command

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli_lib::{logging, system_config};

mod cmd;
mod util;

use cmd::text::{MaskKind, ValidateKind};

/// Tickwise - relative time labels, click debouncing, and display helpers
#[derive(Parser)]
#[command(name = "tw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a timestamp relative to now ("3 hours ago")
    Ago {
        /// Unix milliseconds, RFC 3339, or "now"
        #[arg(allow_negative_numbers = true)]
        timestamp: String,
        /// Reference instant (default: current time)
        #[arg(long)]
        now: Option<String>,
        /// Print the label as JSON
        #[arg(long)]
        json: bool,
    },
    /// Describe a calendar day ("Yesterday", "25 Dec 2023")
    Day {
        /// Date as YYYY-MM-DD or "today"
        date: String,
        /// Reference day (default: today, local time)
        #[arg(long)]
        reference: Option<String>,
        /// Print as "25th Dec 2023" instead
        #[arg(long)]
        ordinal: bool,
        /// Print the label as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a day of month with its ordinal suffix ("21st")
    Ordinal {
        /// Day of month (1-31)
        day: u32,
    },
    /// Replay click timestamps through a debounce gate
    Debounce {
        /// Suppression window in ms (default: gate.min_interval_ms)
        #[arg(long, allow_negative_numbers = true)]
        interval_ms: Option<i64>,
        /// Click timestamps in Unix milliseconds
        #[arg(required = true)]
        timeline: Vec<u64>,
    },
    /// Validate input (exit status 1 when invalid)
    Validate {
        #[arg(value_enum)]
        kind: ValidateKind,
        value: String,
    },
    /// Mask sensitive input for display
    Mask {
        #[arg(value_enum)]
        kind: MaskKind,
        value: String,
    },
    /// Format an amount given in minor units (cents)
    Currency {
        #[arg(allow_negative_numbers = true)]
        minor_units: i64,
        /// Currency symbol (default: display.currency_symbol)
        #[arg(long)]
        symbol: Option<String>,
        /// Minor-unit digits (default: display.currency_decimals)
        #[arg(long)]
        decimals: Option<u32>,
    },
    /// View and edit configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all values
    List,
    /// Get a single value
    Get {
        /// Dotted key, e.g. gate.min_interval_ms
        key: String,
    },
    /// Set a single value
    Set {
        key: String,
        value: String,
    },
    /// Show the config file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Show example configuration
    Example,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `config` subcommands must keep working while the file is invalid
    let config = match &cli.command {
        Commands::Config(_) => system_config::load().unwrap_or_default(),
        _ => system_config::load()?,
    };
    let log_guard = logging::init(&config.log)?;
    let palette = util::Palette::from_config(&config);

    match cli.command {
        Commands::Ago { timestamp, now, json } => {
            cmd::ago::run(&timestamp, now.as_deref(), json, &palette)
        }
        Commands::Day { date, reference, ordinal, json } => {
            cmd::day::run(&date, reference.as_deref(), ordinal, json)
        }
        Commands::Ordinal { day } => cmd::ordinal::run(day),
        Commands::Debounce { interval_ms, timeline } => {
            let interval_ms = interval_ms.unwrap_or(config.gate.min_interval_ms);
            cmd::debounce::run(interval_ms, &timeline, &palette)
        }
        Commands::Validate { kind, value } => {
            if !cmd::text::run_validate(kind, &value, &palette)? {
                // exit() skips destructors; flush the log writer first
                drop(log_guard);
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Mask { kind, value } => cmd::text::run_mask(kind, &value),
        Commands::Currency { minor_units, symbol, decimals } => {
            cmd::currency::run(minor_units, symbol, decimals, &config.display)
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list(&palette),
            ConfigCommands::Get { key } => cmd::config::run_get(&key),
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value, &palette),
            ConfigCommands::Path { create } => cmd::config::run_path(create, &palette),
            ConfigCommands::Example => cmd::config::run_example(),
        },
    }
}
