//! Replay a click timeline through a debounce gate

use crate::util::Palette;
use anyhow::{Context, Result};
use gate::DebounceGate;
use std::cell::Cell;
use tracing::info;

/// Feed `timeline` (Unix ms, in the given order) to a fresh gate
pub fn run(interval_ms: i64, timeline: &[u64], palette: &Palette) -> Result<()> {
    let gate = DebounceGate::<u64>::configure(interval_ms).context("Invalid debounce window")?;
    let fired = Cell::new(0usize);

    for &ts in timeline {
        let accepted = gate.attempt(ts, || fired.set(fired.get() + 1));
        let verdict = if accepted {
            palette.good("accepted")
        } else {
            palette.bad("suppressed")
        };
        println!("{:>14}ms  {}", ts, verdict);
    }

    info!(
        accepted = fired.get(),
        total = timeline.len(),
        window_ms = interval_ms,
        "debounce replay finished"
    );

    println!(
        "{}",
        palette.dim(&format!(
            "{} of {} accepted (window {}ms)",
            fired.get(),
            timeline.len(),
            interval_ms
        ))
    );
    Ok(())
}
