//! cw-core: comicw core library
//!
//! Event record with title-only identity, the SQLite-backed event store,
//! the merge step that reconciles upstream events with stored ones, and
//! configuration.

pub mod config;
pub mod error;
pub mod event;
pub mod merge;
pub mod store;

pub use config::{CalendarConfig, Config, ServerConfig, StoreConfig, UpstreamConfig};
pub use error::{Error, Result};
pub use event::{Event, EventSet};
pub use merge::{MergeOutcome, merge_events};
pub use store::EventStore;
