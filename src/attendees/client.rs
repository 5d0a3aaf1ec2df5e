use crate::attendees::models::{AttendeePage, AttendeeQuery};
use crate::config::Config;
use reqwest::{Client, Error as ReqwestError, Request, Url};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum AttendeeError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Invalid attendee endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Client for the attendee listing endpoint of a single event
#[derive(Clone, Debug)]
pub struct AttendeeClient {
    client: Client,
    endpoint: Url,
}

impl AttendeeClient {
    pub fn new(config: &Config) -> Result<Self, AttendeeError> {
        Self::with_base_url(&config.api_base_url, &config.event_id)
    }

    pub fn with_base_url(base_url: &str, event_id: &str) -> Result<Self, AttendeeError> {
        let raw = format!(
            "{}/events/{}/attendees",
            base_url.trim_end_matches('/'),
            event_id
        );
        let endpoint =
            Url::parse(&raw).map_err(|e| AttendeeError::InvalidEndpoint(format!("{raw}: {e}")))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the GET request for one page without sending it
    pub fn build_request(&self, query: &AttendeeQuery) -> Result<Request, AttendeeError> {
        let request = self
            .client
            .get(self.endpoint.clone())
            .query(&query.to_params())
            .build()?;
        Ok(request)
    }

    /// Fetch one page of attendees
    pub async fn fetch_page(&self, query: &AttendeeQuery) -> Result<AttendeePage, AttendeeError> {
        let request = self.build_request(query)?;
        debug!("Fetching attendees from {}", request.url());

        let response = self.client.execute(request).await?.error_for_status()?;
        let page: AttendeePage = response.json().await?;

        debug!(
            "Received {} attendees (total {})",
            page.attendees.len(),
            page.total
        );
        Ok(page)
    }
}
