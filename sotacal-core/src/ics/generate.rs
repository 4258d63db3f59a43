//! Calendar document generation.

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::event::CalendarEvent;
use crate::ics::fold::fold_document;
use crate::timefmt::{escape_text, format_calendar_instant};

const PRODID: &str = "-//sotacal//SOTA alert feed//EN";

/// Build the full ICS document for a sequence of alerts.
///
/// `now` is the shared generation instant stamped on every event. A record
/// that fails to parse or derive is logged and skipped; the remaining
/// records are unaffected and keep their source order. This never fails:
/// with no usable input the result is a valid header+footer document.
pub fn build_calendar(alerts: &[Alert], now: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
    ];

    for alert in alerts {
        match CalendarEvent::from_alert(alert, now) {
            Ok(event) => push_event(&mut lines, &event),
            Err(err) => {
                tracing::warn!(alert_id = alert.id, error = %err, "skipping alert");
            }
        }
    }

    lines.push("END:VCALENDAR".to_string());
    fold_document(&lines)
}

/// Append one VEVENT block. Only the free-text fields are escaped.
fn push_event(lines: &mut Vec<String>, event: &CalendarEvent) {
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", event.uid));
    lines.push(format!("DTSTAMP:{}", format_calendar_instant(event.stamp)));
    lines.push(format!("SUMMARY:{}", escape_text(&event.summary)));
    lines.push(format!("DTSTART:{}", format_calendar_instant(event.start)));
    lines.push(format!("DTEND:{}", format_calendar_instant(event.end)));
    lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
    lines.push("END:VEVENT".to_string());
}
