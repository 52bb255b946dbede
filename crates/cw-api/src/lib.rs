//! cw-api: HTTP API for comicw
//!
//! Serves the merged convention calendar at `/ical` and a liveness check at
//! `/ping`. Built with axum.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{AppState, router, start_server};
