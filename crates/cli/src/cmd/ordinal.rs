//! Ordinal day ("21st")

use anyhow::{Context, Result};

pub fn run(day: u32) -> Result<()> {
    let ordinal = when::with_ordinal(day).context("Cannot build ordinal")?;
    println!("{}", ordinal);
    Ok(())
}
