//! Read path: fetch the events for a month and filter selection.

pub mod worker;

use std::sync::Arc;

use crate::models::event::EconomicEvent;
use crate::models::filter::{ImpactFilter, YearMonth};
use crate::services::api::{ApiError, EventQuery, EventsApi};

pub use worker::{EventFetchWorker, FetchResult, FetchTicket};

#[derive(Clone)]
pub struct EventQueryClient {
    api: Arc<dyn EventsApi>,
}

impl EventQueryClient {
    pub fn new(api: Arc<dyn EventsApi>) -> Self {
        Self { api }
    }

    /// Events for `month`, or an empty list on any failure.
    pub fn fetch_events(
        &self,
        month: YearMonth,
        selected_countries: &[String],
        selected_impact: ImpactFilter,
    ) -> Vec<EconomicEvent> {
        match self.try_fetch_events(month, selected_countries, selected_impact) {
            Ok(events) => events,
            Err(err) => {
                log::warn!("Fetching events for {} failed: {}", month, err);
                Vec::new()
            }
        }
    }

    /// Same request, with the failure kept distinct from an empty month
    pub fn try_fetch_events(
        &self,
        month: YearMonth,
        selected_countries: &[String],
        selected_impact: ImpactFilter,
    ) -> Result<Vec<EconomicEvent>, ApiError> {
        let query = EventQuery::new(month, selected_countries, selected_impact);
        self.run(&query)
    }

    pub fn run(&self, query: &EventQuery) -> Result<Vec<EconomicEvent>, ApiError> {
        self.api.list_events(query)
    }
}
