use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use super::{EventFormSubmitter, SubmitError};
use crate::models::event::NewEconomicEvent;

/// Runs one create request at a time off the UI thread.
pub struct SubmitWorker {
    submitter: EventFormSubmitter,
    tx: Sender<Result<(), SubmitError>>,
    rx: Receiver<Result<(), SubmitError>>,
    pending: bool,
}

impl SubmitWorker {
    pub fn new(submitter: EventFormSubmitter) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            submitter,
            tx,
            rx,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start posting `payload`. Ignored while a previous post is pending.
    pub fn dispatch(&mut self, payload: NewEconomicEvent) -> bool {
        if self.pending {
            return false;
        }

        self.pending = true;
        let submitter = self.submitter.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = submitter.send(&payload);
            let _ = tx.send(result);
        });
        true
    }

    pub fn poll(&mut self) -> Option<Result<(), SubmitError>> {
        let result = self.rx.try_recv().ok()?;
        self.pending = false;
        Some(result)
    }

    pub fn wait(&mut self, timeout: Duration) -> Option<Result<(), SubmitError>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                self.pending = false;
                Some(result)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
