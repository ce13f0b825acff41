//! Numeric clamping and compact formatting

/// Clamp to `0.0..=100.0`; NaN becomes 0
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Format byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Short count for badges: 950, 1.2K, 3.4M, 5.6B
///
/// One decimal, truncated, and dropped when it is zero ("2K" not "2.0K").
pub fn format_compact(value: i64) -> String {
    const UNITS: [(u64, &str); 3] = [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();

    for (scale, suffix) in UNITS {
        if magnitude >= scale {
            let whole = magnitude / scale;
            let tenth = (magnitude % scale) / (scale / 10);
            return if tenth == 0 {
                format!("{}{}{}", sign, whole, suffix)
            } else {
                format!("{}{}.{}{}", sign, whole, tenth, suffix)
            };
        }
    }

    format!("{}{}", sign, magnitude)
}
