//! HTTP API handlers

use axum::extract::State;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;
use chrono::Utc;
use cw_calendar::{CalendarOptions, encode_calendar};
use cw_core::{EventSet, EventStore, merge_events};
use tracing::{debug, info};

use crate::error::Result;
use crate::server::AppState;

/// Content type of the calendar download
pub const CALENDAR_CONTENT_TYPE: &str = "text/calendar; charset=utf-8";

/// Liveness check
pub async fn ping() -> &'static str {
    "pong!"
}

/// Fetch upstream events, merge them into the store, and return the union as
/// an .ics attachment
pub async fn ical(State(state): State<AppState>) -> Result<impl IntoResponse> {
    // Fetch before touching the store so a bad upstream leaves it untouched
    let upstream = state.client.fetch_events().await?;

    let db_path = state.config.store.db_path.clone();
    let events = tokio::task::spawn_blocking(move || -> cw_core::Result<EventSet> {
        let store = EventStore::open(&db_path)?;
        Ok(merge_events(&store, upstream)?.events)
    })
    .await??;

    let options = CalendarOptions {
        name: state.config.calendar.name.clone(),
    };
    let body = encode_calendar(&events, &options, Utc::now());
    info!("Serving calendar with {} events", events.len());
    debug!("Calendar size: {} bytes", body.len());

    let disposition = format!("attachment; filename={}", state.config.calendar.filename);
    Ok((
        [
            (CONTENT_TYPE, CALENDAR_CONTENT_TYPE.to_string()),
            (CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
