//! Stable event identifiers.

use chrono::{DateTime, Datelike, Utc};
use sha2::{Digest, Sha256};

/// Domain suffix appended to every UID.
const UID_DOMAIN: &str = "sotacal";

/// Derive the UID for an event from its summary and base instant.
///
/// The hash input is the summary plus the zero-based UTC month of the base
/// instant, so re-publishing the same activation within the same month
/// yields the same UID even if upstream timestamps drift within that month.
/// Calendar clients rely on this for de-duplication across rebuilds.
///
/// Compatibility: the digest algorithm (SHA-256) must stay fixed. Changing
/// it changes every UID on the next deploy, which clients would treat as a
/// whole feed of brand-new events.
pub fn event_uid(summary: &str, base: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(summary.as_bytes());
    hasher.update(base.month0().to_string().as_bytes());
    format!("{}@{UID_DOMAIN}", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_uid_is_deterministic() {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let a = event_uid("K1ABC on W7O/CN-001", base);
        let b = event_uid("K1ABC on W7O/CN-001", base);
        assert_eq!(a, b);
        assert!(a.ends_with("@sotacal"), "got {a}");
        let hash = a.split('@').next().unwrap();
        assert_eq!(hash.len(), 64, "lowercase hex SHA-256");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_uid_stable_across_days_within_month() {
        let d1 = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let d2 = Utc.with_ymd_and_hms(2024, 6, 28, 4, 30, 0).unwrap();
        assert_eq!(
            event_uid("K1ABC on W7O/CN-001", d1),
            event_uid("K1ABC on W7O/CN-001", d2)
        );
    }

    #[test]
    fn test_uid_changes_across_months_and_summaries() {
        let jun = Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap();
        let jul = Utc.with_ymd_and_hms(2024, 7, 1, 10, 0, 0).unwrap();
        assert_ne!(
            event_uid("K1ABC on W7O/CN-001", jun),
            event_uid("K1ABC on W7O/CN-001", jul)
        );
        assert_ne!(
            event_uid("K1ABC on W7O/CN-001", jun),
            event_uid("K1ABC on W7O/CN-002", jun)
        );
    }

    #[test]
    fn test_uid_collides_within_month_by_design() {
        // Two distinct activations of the same summit in the same month get
        // the same UID. This is the upstream de-dup behavior, preserved.
        let early = Utc.with_ymd_and_hms(2024, 6, 2, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 6, 23, 16, 0, 0).unwrap();
        assert_eq!(
            event_uid("K1ABC on W7O/CN-001", early),
            event_uid("K1ABC on W7O/CN-001", late)
        );
    }
}
