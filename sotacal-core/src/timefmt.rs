//! Time parsing/formatting and RFC 5545 text escaping.

use chrono::{DateTime, Utc};

use crate::error::{SotaCalError, SotaCalResult};

/// Parse an ISO 8601 timestamp with an explicit offset into a UTC instant.
///
/// The calendar builder treats a failure here as "skip this record".
pub fn parse_instant(text: &str) -> SotaCalResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SotaCalError::Parse(format!("{text:?}: {e}")))
}

/// Format an instant as `YYYYMMDDTHHMMSSZ` (UTC fields, zero-padded).
pub fn format_calendar_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Render a duration as the single largest whole unit, e.g. "5m ago".
///
/// Each tier is computed from the rounded value of the immediately smaller
/// unit (minutes from rounded seconds, hours from rounded minutes, ...), so
/// rounding compounds rather than being recomputed from raw milliseconds.
/// Week = 7 d, month = 30 d, year = 365 d. Negative inputs clamp to zero.
pub fn relative_age(millis: i64) -> String {
    let secs = round_div(millis.max(0), 1000);
    if secs < 60 {
        return format!("{secs}s ago");
    }
    let mins = round_div(secs, 60);
    if mins < 60 {
        return format!("{mins}m ago");
    }
    let hours = round_div(mins, 60);
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = round_div(hours, 24);
    if days < 7 {
        return format!("{days}d ago");
    }
    let weeks = round_div(days, 7);
    if weeks < 4 {
        return format!("{weeks}w ago");
    }
    let months = round_div(days, 30);
    if months < 12 {
        return format!("{months}mo ago");
    }
    format!("{}y ago", round_div(days, 365))
}

/// Round-half-up integer division.
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Escape text for use as an ICS property value.
///
/// Backslash is escaped first so the backslashes introduced for commas and
/// semicolons are not themselves re-escaped. Line breaks (CRLF or bare LF)
/// normalize to the literal two-character sequence `\n`. Applied to every
/// free-text field placed into the output (summary, description) and to no
/// other field.
pub fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}
