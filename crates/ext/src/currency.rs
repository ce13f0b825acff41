//! Currency formatting on integer minor units
//!
//! Amounts are always integers (cents, paise...), never floats.

/// Digits in `u64::MAX`; no magnitude needs more fraction padding
const MAX_FRACTION_DIGITS: u32 = 20;

/// How to render an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: String,
    /// Minor-unit digits (2 for cents, 0 for yen)
    pub decimals: u32,
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl CurrencyFormat {
    /// Default separators with a custom symbol and precision
    pub fn with_symbol(symbol: impl Into<String>, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            ..Self::default()
        }
    }
}

/// Format `minor_units` as e.g. "$1,234.56" or "-$0.05"
pub fn format_currency(minor_units: i64, format: &CurrencyFormat) -> String {
    let negative = minor_units < 0;
    let magnitude = minor_units.unsigned_abs();

    // Precision beyond u64 range collapses to an all-fraction rendering
    let scale = 10u64.checked_pow(format.decimals).unwrap_or(u64::MAX);
    let whole = magnitude / scale;
    let fraction = magnitude % scale;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format.symbol);
    out.push_str(&group_with(whole, format.group_separator));

    if format.decimals > 0 {
        out.push(format.decimal_separator);
        let width = format.decimals.min(MAX_FRACTION_DIGITS) as usize;
        out.push_str(&format!("{:0width$}", fraction, width = width));
    }

    out
}

/// Insert `,` every three digits ("1,234,567")
pub fn group_thousands(value: u64) -> String {
    group_with(value, ',')
}

fn group_with(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }

    out
}
