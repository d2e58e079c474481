//! Formatting helpers for CLI output.

use ansi_term::Colour;
use chrono::{DateTime, Local, Utc};

/// Local wall-clock rendering of a stored UTC timestamp.
pub fn local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// `02h 25m` for a duration in seconds (negative values clamp to zero).
pub fn secs2readable(secs: i64) -> String {
    let mins = secs.max(0) / 60;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}

/// End column: a green "open" marker while the record is open,
/// otherwise the local end time. The marker is padded to `width` before
/// colouring since escape codes would otherwise count towards the width.
pub fn end_or_open(is_open: bool, end: &DateTime<Utc>, width: usize) -> String {
    if is_open {
        let cell = format!("{:<width$}", "open", width = width);
        Colour::Green.bold().paint(cell).to_string()
    } else {
        local_time(end)
    }
}

/// Cut `s` to at most `width` characters, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
