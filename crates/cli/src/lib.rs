//! Shared pieces of the `tw` binary: system config, logging bootstrap,
//! and argument parsing

pub mod logging;
pub mod parse;
pub mod system_config;
