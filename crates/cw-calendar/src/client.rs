//! Upstream AJAX client

use std::time::Duration;

use cw_core::{Event, UpstreamConfig};
use reqwest::Client;
use tracing::{debug, error, info};

use crate::error::{CalendarError, Result};
use crate::models::parse_events;

/// Client for the comicw event listing endpoint
#[derive(Clone)]
pub struct ComicwClient {
    client: Client,
    url: String,
    category: String,
}

impl ComicwClient {
    /// Create a new client from the upstream configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CalendarError::Configuration(e.to_string()))?;

        info!("Upstream client initialized for: {}", config.url);

        Ok(Self {
            client,
            url: config.url.clone(),
            category: config.category.clone(),
        })
    }

    /// Create with a custom endpoint URL (for testing)
    pub fn with_base_url(config: &UpstreamConfig, url: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.url = url.into();
        Ok(client)
    }

    /// Fetch the current event listing.
    ///
    /// One POST, no retries. Fails as a whole on transport errors, non-2xx
    /// status, or any malformed entry.
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        debug!("Fetching events from: {} (type={})", self.url, self.category);

        let response = self
            .client
            .post(&self.url)
            .form(&[("type", self.category.as_str())])
            .send()
            .await
            .map_err(|e| CalendarError::Connection(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CalendarError::Connection(e.to_string()))?;

        if !status.is_success() {
            error!("Upstream request failed: {} - {}", status, body);
            return Err(CalendarError::Upstream(format!(
                "Request failed: {} - {}",
                status, body
            )));
        }

        let events = parse_events(&body)?;
        info!("Fetched {} events", events.len());
        Ok(events)
    }
}
