//! Helpers for putting player-typed text (posts, notes, raw commands) into
//! log lines without breaking the one-record-per-line layout.

use std::fmt::Write;

/// Longest slice of player text copied into a log line.
pub const LOG_PREVIEW_CHARS: usize = 160;

/// Escape `s` for a single log line and cap it at [`LOG_PREVIEW_CHARS`].
///
/// Backslashes, newlines, carriage returns and tabs get their usual escapes;
/// any other control character is written as `\xNN`.
pub fn escape_log(s: &str) -> String {
    escape_log_with_limit(s, LOG_PREVIEW_CHARS)
}

pub fn escape_log_with_limit(s: &str, limit: usize) -> String {
    let mut out = String::with_capacity(s.len().min(limit) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= limit {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
