//! Convention event record and title-keyed event set

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;

use crate::{Error, Result};

/// Storage/wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One comic-convention occurrence.
///
/// Identity is the title alone: two events with the same title compare
/// equal (and hash equal) even when their place or dates differ.
#[derive(Debug, Clone)]
pub struct Event {
    title: String,
    place: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Event {
    /// Create a new event
    pub fn new(
        title: impl Into<String>,
        place: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            place: place.into(),
            start_date,
            end_date,
        }
    }

    /// Build an event from the text columns of a stored row
    pub fn from_row(
        title: impl Into<String>,
        place: impl Into<String>,
        start_date: &str,
        end_date: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            title,
            place,
            parse_date(start_date)?,
            parse_date(end_date)?,
        ))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The identity predicate behind `PartialEq` and `Hash`
    pub fn same_title(&self, other: &Event) -> bool {
        self.title == other.title
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.same_title(other)
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
    }
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`, no time component).
///
/// The shape is checked before handing off to chrono, whose `%m`/`%d` accept
/// single digits and whose `%Y` accepts a sign and leading whitespace.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| Error::InvalidDate {
        value: value.to_string(),
        reason,
    };

    if !is_iso_date_shape(value.as_bytes()) {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| invalid(e.to_string()))
}

fn is_iso_date_shape(bytes: &[u8]) -> bool {
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Insertion-ordered set of events under title equality.
///
/// The first variant inserted for a title is the one that is kept.
#[derive(Debug, Clone, Default)]
pub struct EventSet {
    titles: HashSet<String>,
    events: Vec<Event>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event; returns false (and drops it) if the title is already present
    pub fn insert(&mut self, event: Event) -> bool {
        if self.titles.contains(&event.title) {
            return false;
        }
        self.titles.insert(event.title.clone());
        self.events.push(event);
        true
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.contains_title(&event.title)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Events of `self` whose titles are not in `other`
    pub fn difference<'a>(&'a self, other: &'a EventSet) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| !other.contains(e))
    }

    /// Union of both sets; variants in `self` win over same-titled ones in `other`
    pub fn union(mut self, other: EventSet) -> EventSet {
        self.extend(other);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

impl Extend<Event> for EventSet {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for event in iter {
            self.insert(event);
        }
    }
}

impl FromIterator<Event> for EventSet {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut set = EventSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for EventSet {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a> IntoIterator for &'a EventSet {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn event(title: &str, place: &str) -> Event {
        Event::new(title, place, date("2024-05-01"), date("2024-05-03"))
    }

    #[test]
    fn test_same_title_is_equal() {
        let a = Event::new("ExpoA", "HallA", date("2024-05-01"), date("2024-05-03"));
        let b = Event::new("ExpoA", "HallB", date("2025-01-10"), date("2025-01-11"));
        assert_eq!(a, b);
        assert!(a.same_title(&b));
        assert_ne!(a, event("ExpoB", "HallA"));
    }

    #[test]
    fn test_set_keeps_first_seen_variant() {
        let set: EventSet = vec![event("ExpoA", "OldHall"), event("ExpoA", "NewHall")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().next().unwrap().place(), "OldHall");

        // Same rule holds for std sets built from the Hash/Eq impls
        let std_set: HashSet<Event> = [event("ExpoA", "OldHall"), event("ExpoA", "NewHall")]
            .into_iter()
            .collect();
        assert_eq!(std_set.len(), 1);
    }

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = EventSet::new();
        assert!(set.insert(event("ExpoA", "HallA")));
        assert!(!set.insert(event("ExpoA", "HallB")));
        assert!(set.contains_title("ExpoA"));
        assert!(!set.contains_title("ExpoB"));
    }

    #[test]
    fn test_difference_and_union() {
        let stored: EventSet = vec![event("ExpoA", "OldHall"), event("ExpoB", "HallB")]
            .into_iter()
            .collect();
        let upstream: EventSet = vec![event("ExpoA", "NewHall"), event("ExpoC", "HallC")]
            .into_iter()
            .collect();

        let new: Vec<&str> = upstream.difference(&stored).map(Event::title).collect();
        assert_eq!(new, vec!["ExpoC"]);

        let merged = stored.union(upstream);
        let places: Vec<&str> = merged.iter().map(Event::place).collect();
        assert_eq!(places, vec!["OldHall", "HallB", "HallC"]);
    }

    #[test]
    fn test_from_row_matches_new() {
        let from_row = Event::from_row("ExpoA", "HallA", "2024-05-01", "2024-05-03").unwrap();
        let built = event("ExpoA", "HallA");
        assert_eq!(from_row, built);
        assert_eq!(from_row.place(), built.place());
        assert_eq!(from_row.start_date(), built.start_date());
        assert_eq!(from_row.end_date(), built.end_date());
    }

    #[test]
    fn test_from_row_rejects_malformed_date() {
        let result = Event::from_row("ExpoA", "HallA", "2024/05/01", "2024-05-03");
        assert!(matches!(result, Err(Error::InvalidDate { .. })));

        let result = Event::from_row("ExpoA", "HallA", "2024-05-01", "2024-05-03T10:00:00");
        assert!(result.is_err());

        for bad in [
            "2024-5-1",
            " 2024-05-01",
            "+2024-05-01",
            "02024-05-01",
            "2024-05-1",
            "2024-02-30",
            "２０２４-05-01",
        ] {
            let result = Event::from_row("ExpoA", "HallA", bad, "2024-05-03");
            assert!(
                matches!(result, Err(Error::InvalidDate { .. })),
                "accepted {:?}",
                bad
            );
        }
    }
}
