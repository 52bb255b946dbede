//! cw-calendar: upstream event source and calendar output for comicw
//!
//! ## Features
//!
//! - Client for the comicw AJAX event listing
//! - Wire model for upstream entries and their conversion into [`cw_core::Event`]
//! - iCalendar (RFC 5545) document generation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cw_calendar::{CalendarOptions, ComicwClient, encode_calendar};
//!
//! let client = ComicwClient::new(&config.upstream)?;
//! let events = client.fetch_events().await?;
//! let ics = encode_calendar(&events, &CalendarOptions::default(), chrono::Utc::now());
//! ```

pub mod client;
pub mod error;
pub mod ics;
pub mod models;

pub use client::ComicwClient;
pub use error::{CalendarError, Result};
pub use ics::{CalendarOptions, encode_calendar};
pub use models::UpstreamEvent;
