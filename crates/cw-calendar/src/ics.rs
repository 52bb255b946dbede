//! ICS document generation.

use chrono::{DateTime, Utc};
use cw_core::Event;
use icalendar::{Calendar, Component, EventLike};
use uuid::Uuid;

/// Document-level settings for the generated calendar
#[derive(Debug, Clone)]
pub struct CalendarOptions {
    /// Emitted as X-WR-CALNAME
    pub name: String,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self {
            name: "comicw".to_string(),
        }
    }
}

/// Stable UID for an event, derived from its title (the event's identity)
pub fn event_uid(event: &Event) -> String {
    let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, event.title().as_bytes());
    format!("{}@comicw", id)
}

/// Generate a full VCALENDAR with one all-day VEVENT per event.
///
/// `stamp` fills every DTSTAMP, so the output only depends on the inputs.
pub fn encode_calendar<'a, I>(events: I, options: &CalendarOptions, stamp: DateTime<Utc>) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut cal = Calendar::new();
    cal.name(&options.name);

    for event in events {
        let ics_event = icalendar::Event::new()
            .uid(&event_uid(event))
            .timestamp(stamp)
            .summary(event.title())
            .location(event.place())
            .starts(event.start_date())
            .ends(event.end_date())
            .done();
        cal.push(ics_event);
    }

    cal.done().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_single_event_fields() {
        let events = vec![Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03"))];
        let ics = encode_calendar(&events, &CalendarOptions::default(), stamp());

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.trim_end().ends_with("END:VCALENDAR"));
        assert!(ics.contains("VERSION:2.0"));
        assert!(ics.contains("X-WR-CALNAME:comicw"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
        assert!(ics.contains("SUMMARY:ExpoA"));
        assert!(ics.contains("LOCATION:HallA"));
        assert!(ics.contains("DTSTART;VALUE=DATE:20240501"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240503"));
        assert!(ics.contains("DTSTAMP:20240401T120000Z"));
        assert!(ics.contains(&format!("UID:{}", event_uid(&events[0]))));
    }

    #[test]
    fn test_one_entry_per_event() {
        let events = vec![
            Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03")),
            Event::new("코믹월드", "세텍", date("2024-06-01"), date("2024-06-02")),
        ];
        let ics = encode_calendar(&events, &CalendarOptions::default(), stamp());

        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert_eq!(ics.matches("END:VEVENT").count(), 2);
        assert!(ics.contains("SUMMARY:코믹월드"));
        assert!(ics.contains("LOCATION:세텍"));
    }

    #[test]
    fn test_empty_calendar_is_still_a_document() {
        let ics = encode_calendar(&Vec::<Event>::new(), &CalendarOptions::default(), stamp());
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let events = vec![Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03"))];
        let first = encode_calendar(&events, &CalendarOptions::default(), stamp());
        let second = encode_calendar(&events, &CalendarOptions::default(), stamp());
        assert_eq!(first, second);
    }

    #[test]
    fn test_stored_and_upstream_variants_encode_identically() {
        let stored = Event::from_row("ExpoA", "HallA", "2024-05-01", "2024-05-03").unwrap();
        let fresh = Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03"));

        let a = encode_calendar([&stored], &CalendarOptions::default(), stamp());
        let b = encode_calendar([&fresh], &CalendarOptions::default(), stamp());
        assert_eq!(a, b);
    }

    #[test]
    fn test_uid_depends_on_title_only() {
        let a = Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03"));
        let b = Event::new("ExpoA", "HallB", date("2025-01-01"), date("2025-01-02"));
        let c = Event::new("ExpoB", "HallA", date("2024-05-01"), date("2024-05-03"));
        assert_eq!(event_uid(&a), event_uid(&b));
        assert_ne!(event_uid(&a), event_uid(&c));
    }
}
