//! Format an integer amount

use anyhow::Result;
use cli_lib::system_config::{DisplayConfig, MAX_CURRENCY_DECIMALS};
use ext::CurrencyFormat;

pub fn run(
    minor_units: i64,
    symbol: Option<String>,
    decimals: Option<u32>,
    display: &DisplayConfig,
) -> Result<()> {
    let decimals = decimals.unwrap_or(display.currency_decimals);
    if decimals > MAX_CURRENCY_DECIMALS {
        anyhow::bail!(
            "--decimals must be in 0-{} (got {})",
            MAX_CURRENCY_DECIMALS,
            decimals
        );
    }

    let format = CurrencyFormat::with_symbol(
        symbol.unwrap_or_else(|| display.currency_symbol.clone()),
        decimals,
    );
    println!("{}", ext::format_currency(minor_units, &format));
    Ok(())
}
