//! Event window resolution.
//!
//! An alert's notes may carry window hints: `S+N` overrides the hours after
//! the nominal start (default 3), `S-N` the hours before it (default 1).
//! The `S` is case-insensitive and the two hints are independent. The
//! grammar is deliberately narrow: a literal `S`, a sign, one or more
//! digits, first match wins.

use std::sync::OnceLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;

use crate::error::{SotaCalError, SotaCalResult};

const DEFAULT_HOURS_BEFORE: i64 = 1;
const DEFAULT_HOURS_AFTER: i64 = 3;

/// The resolved start/end instants of one calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Compute the event window around `base` from optional notes text.
///
/// No validation that `end > start`: an inverted or zero-width window is a
/// faithful reflection of the hint and is emitted verbatim.
pub fn resolve_window(base: DateTime<Utc>, notes: Option<&str>) -> SotaCalResult<EventWindow> {
    let hours_after = scan_hint(notes, after_pattern())?.unwrap_or(DEFAULT_HOURS_AFTER);
    let hours_before = scan_hint(notes, before_pattern())?.unwrap_or(DEFAULT_HOURS_BEFORE);

    let before = Duration::try_hours(hours_before)
        .ok_or_else(|| SotaCalError::Derivation(format!("hour count out of range: S-{hours_before}")))?;
    let after = Duration::try_hours(hours_after)
        .ok_or_else(|| SotaCalError::Derivation(format!("hour count out of range: S+{hours_after}")))?;

    let start = base
        .checked_sub_signed(before)
        .ok_or_else(|| SotaCalError::Derivation(format!("window start overflows: S-{hours_before}")))?;
    let end = base
        .checked_add_signed(after)
        .ok_or_else(|| SotaCalError::Derivation(format!("window end overflows: S+{hours_after}")))?;

    Ok(EventWindow { start, end })
}

/// First match of `pattern` in `notes`, parsed as a non-negative hour count.
fn scan_hint(notes: Option<&str>, pattern: &Regex) -> SotaCalResult<Option<i64>> {
    let Some(notes) = notes else {
        return Ok(None);
    };
    match pattern.captures(notes) {
        Some(captures) => {
            let digits = &captures[1];
            let hours = digits
                .parse::<i64>()
                .map_err(|e| SotaCalError::Derivation(format!("window hint {digits:?}: {e}")))?;
            Ok(Some(hours))
        }
        None => Ok(None),
    }
}

fn after_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)s\+(\d+)").unwrap())
}

fn before_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)s-(\d+)").unwrap())
}
