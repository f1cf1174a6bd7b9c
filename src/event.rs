//! Calendar event submitted with the Sync command.

use chrono::{DateTime, Duration, Utc};

/// How long the sample event lasts.
const SAMPLE_EVENT_HOURS: i64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub subject: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub description: String,
    pub location: String,
}

impl Event {
    /// The fixed event the client creates, starting at `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Event {
            subject: "test".to_string(),
            start: now,
            end: now + Duration::hours(SAMPLE_EVENT_HOURS),
            description: "djhfbchjbchb".to_string(),
            location: "home".to_string(),
        }
    }
}

/// Format a timestamp the way EAS expects: `YYYYMMDDTHHMMSSZ`.
pub fn format_eas_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sample_event_spans_three_hours() {
        let now = Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap();
        let event = Event::sample(now);

        assert_eq!(event.subject, "test");
        assert_eq!(event.location, "home");
        assert_eq!(event.start, now);
        assert_eq!(event.end - event.start, Duration::hours(3));
    }

    #[test]
    fn test_format_eas_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_eas_datetime(&dt), "20250102T030405Z");
    }
}
