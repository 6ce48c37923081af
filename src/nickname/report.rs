//! Plain-text nickname history report

use super::history::{longest_standing, NicknameHistory};
use chrono::DateTime;
use std::fmt::Write;

/// Render a millisecond timestamp as a UTC `DD/MM/YYYY` date.
pub fn format_date(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| format!("@{timestamp_ms}"))
}

/// Render the report: one block per person with a header, the optional
/// longest-standing line, one dated line per nickname, and a blank line.
pub fn render_report(history: &NicknameHistory, now_ms: i64) -> String {
    let mut out = String::new();
    for (name, events) in history.people() {
        if events.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({} nicknames):", name, events.len());
        if let Some(best) = longest_standing(events, now_ms) {
            let _ = writeln!(
                out,
                "Longest Standing Nickname: {} ({} days, from {} to {})",
                best.nickname,
                best.duration_days,
                format_date(best.start_ms),
                format_date(best.end_ms)
            );
        }
        for event in events {
            let _ = writeln!(out, "{} - {}", format_date(event.timestamp_ms), event.nickname);
        }
        out.push('\n');
    }
    out
}
