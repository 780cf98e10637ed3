//! Events API seam.
//!
//! [`EventsApi`] is the boundary to the remote service; [`http::HttpEventsApi`]
//! is the production implementation. [`EventQuery`] holds the read-path
//! parameters derived from the current filters.

pub mod http;

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::models::event::{EconomicEvent, Impact, NewEconomicEvent};
use crate::models::filter::{FilterState, ImpactFilter, YearMonth};

pub const EVENTS_PATH: &str = "/api/events";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Events API returned HTTP {0}")]
    Status(u16),

    #[error("Failed to decode events response: {0}")]
    Decode(String),

    #[error("Events response was not a list (got {0})")]
    NotAList(&'static str),
}

/// Remote events service
#[cfg_attr(test, mockall::automock)]
pub trait EventsApi: Send + Sync {
    /// `GET /api/events` with the query's filters
    fn list_events(&self, query: &EventQuery) -> Result<Vec<EconomicEvent>, ApiError>;

    /// `POST /api/events`
    fn create_event(&self, event: &NewEconomicEvent) -> Result<(), ApiError>;
}

/// Read-path parameters: inclusive date range plus optional filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub countries: Vec<String>,
    pub impact: Option<Impact>,
}

impl EventQuery {
    pub fn new(month: YearMonth, countries: &[String], impact: ImpactFilter) -> Self {
        Self {
            start_date: month.first_day(),
            end_date: month.last_day(),
            countries: countries.to_vec(),
            impact: impact.level(),
        }
    }

    pub fn from_filters(filters: &FilterState) -> Self {
        Self::new(
            filters.month(),
            filters.selected_countries(),
            filters.selected_impact(),
        )
    }

    /// Query parameters in wire order. `country` is omitted when no
    /// countries are selected, `impact` when every level is wanted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startDate", self.start_date.format("%Y-%m-%d").to_string()),
            ("endDate", self.end_date.format("%Y-%m-%d").to_string()),
        ];
        if !self.countries.is_empty() {
            pairs.push(("country", self.countries.join(",")));
        }
        if let Some(impact) = self.impact {
            pairs.push(("impact", impact.as_str().to_string()));
        }
        pairs
    }

    /// Full request URL under `base_url`
    pub fn to_url(&self, base_url: &str) -> String {
        let query = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| {
                // Keep the comma separator readable; encode each element
                let encoded = value
                    .split(',')
                    .map(|part| urlencoding::encode(part).into_owned())
                    .collect::<Vec<_>>()
                    .join(",");
                format!("{}={}", key, encoded)
            })
            .collect::<Vec<_>>()
            .join("&");

        format!("{}{}?{}", base_url.trim_end_matches('/'), EVENTS_PATH, query)
    }
}

/// Decode a read-path body.
///
/// The body must be a JSON array. Elements that do not look like events are
/// skipped with a warning rather than failing the whole month.
pub fn decode_events(body: &str) -> Result<Vec<EconomicEvent>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(_) => return Err(ApiError::NotAList("object")),
        Value::String(_) => return Err(ApiError::NotAList("string")),
        Value::Number(_) => return Err(ApiError::NotAList("number")),
        Value::Bool(_) => return Err(ApiError::NotAList("boolean")),
        Value::Null => return Err(ApiError::NotAList("null")),
    };

    let total = items.len();
    let events: Vec<EconomicEvent> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value::<EconomicEvent>(item) {
            Ok(event) => Some(event),
            Err(err) => {
                log::warn!("Skipping malformed event at index {}: {}", i, err);
                None
            }
        })
        .collect();

    if events.len() < total {
        log::warn!("Decoded {} of {} events", events.len(), total);
    }

    Ok(events)
}
