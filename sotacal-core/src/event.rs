//! Derived calendar events.

use chrono::{DateTime, Utc};

use crate::alert::Alert;
use crate::error::SotaCalResult;
use crate::timefmt::{parse_instant, relative_age};
use crate::uid::event_uid;
use crate::window::resolve_window;

/// One calendar event derived from an alert, ready for serialization.
///
/// Events exist only transiently during one build; nothing is persisted.
#[derive(Debug, Clone)]
pub struct CalendarEvent {
    pub uid: String,
    /// Generation instant, shared by every event in one build.
    pub stamp: DateTime<Utc>,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Multi-line text; line breaks are normalized during escaping.
    pub description: String,
}

impl CalendarEvent {
    /// Derive an event from one alert. Any failure here means the record is
    /// skipped by the builder; no partial event is ever produced.
    pub fn from_alert(alert: &Alert, now: DateTime<Utc>) -> SotaCalResult<Self> {
        let base = parse_instant(&alert.activation_time)?;
        let window = resolve_window(base, alert.notes.as_deref())?;

        let summary = format!(
            "{} on {}/{}",
            alert.activator_callsign, alert.region_code, alert.location_code
        );

        let posted = parse_instant(&alert.last_modified)?;
        let age = relative_age((now - posted).num_milliseconds());

        let mut description = format!(
            "Frequencies: {}",
            alert.frequency_info.as_deref().unwrap_or("Unknown")
        );
        if let Some(notes) = alert.notes.as_deref() {
            description.push('\n');
            description.push_str(notes);
        }
        description.push_str(&format!(
            "\nPosted {} by {}",
            age,
            alert.poster_callsign.as_deref().unwrap_or("Unknown")
        ));

        Ok(CalendarEvent {
            uid: event_uid(&summary, base),
            stamp: now,
            summary,
            start: window.start,
            end: window.end,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_test_alert() -> Alert {
        Alert {
            id: 42,
            poster_user_id: 7,
            last_modified: "2024-06-01T08:00:00Z".to_string(),
            activation_time: "2024-06-01T10:00:00Z".to_string(),
            region_code: "W7O".to_string(),
            location_code: "CN-001".to_string(),
            frequency_info: Some("14.285".to_string()),
            notes: None,
            activator_callsign: "K1ABC".to_string(),
            activator_display_name: Some("Alice".to_string()),
            poster_callsign: Some("K1ABC".to_string()),
        }
    }

    #[test]
    fn test_from_alert_default_window_and_summary() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let event = CalendarEvent::from_alert(&make_test_alert(), now).unwrap();

        assert_eq!(event.summary, "K1ABC on W7O/CN-001");
        assert_eq!(event.start, Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap());
        assert_eq!(event.end, Utc.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap());
        assert_eq!(event.stamp, now);
        assert_eq!(
            event.description,
            "Frequencies: 14.285\nPosted 1h ago by K1ABC"
        );
    }

    #[test]
    fn test_from_alert_includes_notes_line() {
        let mut alert = make_test_alert();
        alert.notes = Some("QRV 40m, then s+2".to_string());
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let event = CalendarEvent::from_alert(&alert, now).unwrap();

        assert_eq!(
            event.description,
            "Frequencies: 14.285\nQRV 40m, then s+2\nPosted 1h ago by K1ABC"
        );
        assert_eq!(event.end, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_from_alert_missing_optionals_fall_back_to_unknown() {
        let mut alert = make_test_alert();
        alert.frequency_info = None;
        alert.poster_callsign = None;
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 30).unwrap();
        let event = CalendarEvent::from_alert(&alert, now).unwrap();

        assert_eq!(
            event.description,
            "Frequencies: Unknown\nPosted 30s ago by Unknown"
        );
    }

    #[test]
    fn test_from_alert_bad_activation_time_fails() {
        let mut alert = make_test_alert();
        alert.activation_time = "not a timestamp".to_string();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        assert!(CalendarEvent::from_alert(&alert, now).is_err());
    }
}
