//! Background fetches for the calendar page.
//!
//! Each dispatched ticket runs on its own thread and reports back over a
//! channel that the UI drains once per frame.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use super::EventQueryClient;
use crate::models::event::EconomicEvent;
use crate::services::api::{ApiError, EventQuery};

/// One read-path request, tagged with the session sequence number that
/// issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: EventQuery,
}

#[derive(Debug)]
pub struct FetchResult {
    pub seq: u64,
    pub result: Result<Vec<EconomicEvent>, ApiError>,
}

pub struct EventFetchWorker {
    client: EventQueryClient,
    tx: Sender<FetchResult>,
    rx: Receiver<FetchResult>,
    in_flight: usize,
}

impl EventFetchWorker {
    pub fn new(client: EventQueryClient) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            client,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn dispatch(&mut self, ticket: FetchTicket) {
        log::debug!(
            "Dispatching fetch #{} for {}..{}",
            ticket.seq,
            ticket.query.start_date,
            ticket.query.end_date
        );

        self.in_flight += 1;
        let client = self.client.clone();
        let tx = self.tx.clone();

        thread::spawn(move || {
            let result = client.run(&ticket.query);
            // The receiver only goes away when the app is shutting down
            let _ = tx.send(FetchResult {
                seq: ticket.seq,
                result,
            });
        });
    }

    /// Drain finished fetches without blocking.
    pub fn poll(&mut self) -> Vec<FetchResult> {
        let finished: Vec<FetchResult> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(finished.len());
        finished
    }

    /// Block for the next finished fetch, up to `timeout`.
    pub fn wait(&mut self, timeout: Duration) -> Option<FetchResult> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
