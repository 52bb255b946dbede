//! Route definitions

use axum::{Router, routing::get};

use crate::handlers::{ical, ping};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Calendar download
        .route("/ical", get(ical))
        // Liveness check
        .route("/ping", get(ping))
}
