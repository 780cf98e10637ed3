//! Calendar page state: filters, load state and the per-day index.
//!
//! Every effective filter change hands out a [`FetchTicket`] carrying the
//! next sequence number. Only the response for the latest ticket is applied.

use crate::models::event::EconomicEvent;
use crate::models::filter::{FilterState, ImpactFilter, YearMonth};
use crate::services::api::{ApiError, EventQuery};
use crate::services::events_index::{index_by_day, EventsByDay};
use crate::utils::date::today;

pub use crate::services::event_query::FetchTicket;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CalendarSession {
    filters: FilterState,
    load_state: LoadState,
    latest_seq: u64,
    events: Vec<EconomicEvent>,
    index: EventsByDay,
}

impl CalendarSession {
    pub fn new(month: YearMonth) -> Self {
        Self {
            filters: FilterState::new(month),
            load_state: LoadState::Idle,
            latest_seq: 0,
            events: Vec::new(),
            index: EventsByDay::empty(month),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn month(&self) -> YearMonth {
        self.filters.month()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn events(&self) -> &[EconomicEvent] {
        &self.events
    }

    pub fn index(&self) -> &EventsByDay {
        &self.index
    }

    /// Issue a request for the current filters.
    pub fn refresh(&mut self) -> FetchTicket {
        self.latest_seq += 1;
        self.load_state = LoadState::Loading;
        FetchTicket {
            seq: self.latest_seq,
            query: EventQuery::from_filters(&self.filters),
        }
    }

    pub fn set_month(&mut self, month: YearMonth) -> Option<FetchTicket> {
        if !self.filters.set_month(month) {
            return None;
        }
        // Old events belong to another month; never show them in this grid
        self.events.clear();
        self.index = EventsByDay::empty(month);
        Some(self.refresh())
    }

    pub fn previous_month(&mut self) -> Option<FetchTicket> {
        self.set_month(self.month().previous())
    }

    pub fn next_month(&mut self) -> Option<FetchTicket> {
        self.set_month(self.month().next())
    }

    /// Pick a month (1-12) within the displayed year
    pub fn select_month(&mut self, month: u32) -> Option<FetchTicket> {
        let target = self.month().with_month(month)?;
        self.set_month(target)
    }

    pub fn go_to_today(&mut self) -> Option<FetchTicket> {
        self.set_month(YearMonth::from_date(today()))
    }

    pub fn set_countries(&mut self, countries: Vec<String>) -> Option<FetchTicket> {
        self.filters.set_countries(countries).then(|| self.refresh())
    }

    pub fn set_impact(&mut self, impact: ImpactFilter) -> Option<FetchTicket> {
        self.filters.set_impact(impact).then(|| self.refresh())
    }

    /// Apply a finished fetch. Returns `false` when the response is stale.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<Vec<EconomicEvent>, ApiError>,
    ) -> bool {
        if seq != self.latest_seq {
            log::debug!(
                "Discarding stale events response #{} (latest is #{})",
                seq,
                self.latest_seq
            );
            return false;
        }

        let month = self.month();
        match result {
            Ok(events) => {
                self.index = index_by_day(&events, month);
                log::info!(
                    "Loaded {} events for {} ({} on {} days)",
                    events.len(),
                    month,
                    self.index.total(),
                    self.index.busy_days().count()
                );
                self.events = events;
                self.load_state = LoadState::Loaded;
            }
            Err(err) => {
                log::warn!("Could not load events for {}: {}", month, err);
                self.events.clear();
                self.index = EventsByDay::empty(month);
                self.load_state = LoadState::Failed(err.to_string());
            }
        }
        true
    }
}

impl Default for CalendarSession {
    fn default() -> Self {
        Self::new(YearMonth::current())
    }
}
