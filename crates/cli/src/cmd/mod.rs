//! CLI command implementations

pub mod ago;
pub mod config;
pub mod currency;
pub mod day;
pub mod debounce;
pub mod ordinal;
pub mod text;
