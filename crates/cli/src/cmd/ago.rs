//! Relative label for an instant

use crate::util::{self, Palette};
use anyhow::Result;
use chrono::Utc;
use cli_lib::parse::parse_timestamp;
use tracing::debug;

pub fn run(timestamp: &str, now: Option<&str>, json: bool, palette: &Palette) -> Result<()> {
    let past = parse_timestamp(timestamp)?;
    let now = match now {
        Some(now) => parse_timestamp(now)?,
        None => Utc::now(),
    };

    let label = when::relative_from_now(past, now);
    debug!(%past, %now, ?label, "relative label");

    if json {
        return util::print_json(&label);
    }

    println!("{}", label);
    if let Ok(absolute) = when::format_absolute_time(past.timestamp_millis()) {
        println!("{}", palette.dim(&format!("{} UTC", absolute)));
    }
    Ok(())
}
