//! Presentation helpers for nullable values, text, money and numbers
//!
//! Everything here is a stateless transformation. Absent or malformed
//! input degrades to an empty / zero / default result instead of failing.

pub mod collections;
pub mod currency;
pub mod numbers;
pub mod optional;
pub mod text;

// Re-exports
pub use collections::{join_non_blank, OptionVecExt};
pub use currency::{format_currency, group_thousands, CurrencyFormat};
pub use numbers::{clamp_percent, format_compact, format_size};
pub use optional::{value_or_default, OptionStrExt};
