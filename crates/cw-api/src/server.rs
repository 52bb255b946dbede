//! HTTP API Server
//!
//! Starts and manages the axum-based HTTP server.

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use cw_calendar::ComicwClient;
use cw_core::Config;

use crate::routes::routes;

/// Shared application state.
///
/// Holds no storage handle: every `/ical` call opens its own connection.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<ComicwClient>,
}

impl AppState {
    pub fn new(config: Config, client: ComicwClient) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
        }
    }
}

/// Build the application router with its layers
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP API server
pub async fn start_server(config: Config, client: ComicwClient) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let app = router(AppState::new(config, client));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
