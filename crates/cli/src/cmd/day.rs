//! Calendar-day label

use crate::util;
use anyhow::Result;
use chrono::Local;
use cli_lib::parse::parse_date;

pub fn run(date: &str, reference: Option<&str>, ordinal: bool, json: bool) -> Result<()> {
    let target = parse_date(date)?;
    let reference = match reference {
        Some(reference) => parse_date(reference)?,
        None => Local::now().date_naive(),
    };

    if ordinal {
        println!("{}", when::ordinal_date(target));
        return Ok(());
    }

    let label = when::human_friendly_date(target, reference);
    if json {
        util::print_json(&label)
    } else {
        println!("{}", label);
        Ok(())
    }
}
