// Test fixtures - reusable test data
// Sample events, months and an in-memory events API

#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use econ_calendar::models::event::{EconomicEvent, NewEconomicEvent};
use econ_calendar::models::filter::YearMonth;
use econ_calendar::services::api::{ApiError, EventQuery, EventsApi};

/// Sample months for testing
pub mod months {
    use super::*;

    pub fn march_2024() -> YearMonth {
        YearMonth::new(2024, 3).unwrap()
    }

    /// Leap February
    pub fn february_2024() -> YearMonth {
        YearMonth::new(2024, 2).unwrap()
    }

    pub fn december_2024() -> YearMonth {
        YearMonth::new(2024, 12).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, date: &str, title: &str, impact: &str) -> EconomicEvent {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "date": date,
            "time": "08:30",
            "country": "United States",
            "event": title,
            "impact": impact
        }))
        .unwrap()
    }

    /// A busy March 2024: five releases on the 12th, one on the 8th
    pub fn march_2024_releases() -> Vec<EconomicEvent> {
        vec![
            event("nfp", "2024-03-08", "Non-Farm Payrolls", "high"),
            event("cpi", "2024-03-12", "CPI m/m", "high"),
            event("core", "2024-03-12T00:00:00.000Z", "Core CPI m/m", "high"),
            event("yoy", "2024-03-12", "CPI y/y", "medium"),
            event("rev", "2024-03-12", "Federal Budget Balance", "low"),
            event("wkly", "2024-03-12", "Redbook", "unknown"),
        ]
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// In-memory events API recording every request
#[derive(Default)]
pub struct FakeEventsApi {
    pub list_response: Mutex<Option<Result<Vec<EconomicEvent>, ApiError>>>,
    pub create_response: Mutex<Option<Result<(), ApiError>>>,
    pub queries: Mutex<Vec<EventQuery>>,
    pub created: Mutex<Vec<NewEconomicEvent>>,
}

impl FakeEventsApi {
    pub fn returning(events: Vec<EconomicEvent>) -> Self {
        let api = Self::default();
        *api.list_response.lock().unwrap() = Some(Ok(events));
        api
    }

    pub fn failing(error: ApiError) -> Self {
        let api = Self::default();
        *api.list_response.lock().unwrap() = Some(Err(error.clone()));
        *api.create_response.lock().unwrap() = Some(Err(error));
        api
    }

    pub fn recorded_queries(&self) -> Vec<EventQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn recorded_creates(&self) -> Vec<NewEconomicEvent> {
        self.created.lock().unwrap().clone()
    }
}

impl EventsApi for FakeEventsApi {
    fn list_events(&self, query: &EventQuery) -> Result<Vec<EconomicEvent>, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        self.list_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn create_event(&self, event: &NewEconomicEvent) -> Result<(), ApiError> {
        self.created.lock().unwrap().push(event.clone());
        self.create_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Ok(()))
    }
}
