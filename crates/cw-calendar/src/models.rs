//! Wire models for the upstream event listing

use cw_core::event::{Event, parse_date};
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// One entry of the upstream JSON array
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamEvent {
    pub title: String,
    pub place: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
}

impl TryFrom<UpstreamEvent> for Event {
    type Error = CalendarError;

    fn try_from(raw: UpstreamEvent) -> Result<Self, Self::Error> {
        let start = parse_date(&raw.start_date).map_err(|e| CalendarError::ParseError(e.to_string()))?;
        let end = parse_date(&raw.end_date).map_err(|e| CalendarError::ParseError(e.to_string()))?;
        Ok(Event::new(raw.title, raw.place, start, end))
    }
}

/// Parse a full upstream response body. Any bad entry fails the whole body.
pub fn parse_events(body: &str) -> Result<Vec<Event>, CalendarError> {
    let raw: Vec<UpstreamEvent> =
        serde_json::from_str(body).map_err(|e| CalendarError::ParseError(e.to_string()))?;
    raw.into_iter().map(Event::try_from).collect()
}
