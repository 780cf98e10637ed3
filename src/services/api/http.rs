use reqwest::blocking::Client;

use super::{decode_events, ApiError, EventQuery, EventsApi, EVENTS_PATH};
use crate::models::event::{EconomicEvent, NewEconomicEvent};
use crate::models::settings::AppConfig;

/// Blocking HTTP client for the events API.
///
/// Calls block the current thread; the UI runs them on worker threads.
pub struct HttpEventsApi {
    client: Client,
    base_url: String,
}

impl HttpEventsApi {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.normalized_base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn events_url(&self) -> String {
        format!("{}{}", self.base_url, EVENTS_PATH)
    }
}

impl EventsApi for HttpEventsApi {
    fn list_events(&self, query: &EventQuery) -> Result<Vec<EconomicEvent>, ApiError> {
        let url = query.to_url(&self.base_url);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

        let events = decode_events(&body)?;
        log::info!(
            "Fetched {} events for {}..{}",
            events.len(),
            query.start_date,
            query.end_date
        );
        Ok(events)
    }

    fn create_event(&self, event: &NewEconomicEvent) -> Result<(), ApiError> {
        let url = self.events_url();
        log::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(event)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        // The body is informational only
        match response.text() {
            Ok(body) => log::debug!("Create response: {}", body),
            Err(err) => log::debug!("Create response body unreadable: {}", err),
        }

        log::info!("Created event '{}' on {}", event.event, event.date);
        Ok(())
    }
}
