//! Write path: validate the add-event form and post it.

pub mod worker;

use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::models::country::CountryCatalog;
use crate::models::event::NewEconomicEvent;
use crate::models::event_form::{CountryTypeAhead, EventFormFields, FormError};
use crate::services::api::{ApiError, EventsApi};

pub use worker::SubmitWorker;

pub const SUCCESS_MESSAGE: &str = "Event submitted successfully!";
pub const FAILURE_MESSAGE: &str = "Error submitting event.";

/// How long the success confirmation stays up
pub const CONFIRMATION_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error("Failed to create event: {0}")]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct EventFormSubmitter {
    api: Arc<dyn EventsApi>,
}

impl EventFormSubmitter {
    pub fn new(api: Arc<dyn EventsApi>) -> Self {
        Self { api }
    }

    /// Validate and post in one go. No request is made for an invalid form.
    pub fn submit(
        &self,
        fields: &EventFormFields,
        catalog: &CountryCatalog,
    ) -> Result<(), SubmitError> {
        let payload = fields.validate(catalog)?;
        self.send(&payload)
    }

    pub fn send(&self, payload: &NewEconomicEvent) -> Result<(), SubmitError> {
        self.api.create_event(payload).map_err(|err| {
            log::error!("Submitting '{}' failed: {}", payload.event, err);
            SubmitError::Api(err)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded { at: Instant },
    /// Rejected before any request was made
    Invalid(FormError),
    Failed,
}

/// Add-event page state: field values, the country type-ahead and the
/// outcome of the last submit.
#[derive(Debug, Clone, Default)]
pub struct EventFormState {
    pub fields: EventFormFields,
    pub country_input: CountryTypeAhead,
    status: SubmitStatus,
}

impl EventFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validate and move to `Submitting`. Returns the payload to send, or
    /// `None` if a submit is already running or the form is invalid.
    pub fn begin_submit(&mut self, catalog: &CountryCatalog) -> Option<NewEconomicEvent> {
        if self.is_submitting() {
            return None;
        }

        match self.fields.validate(catalog) {
            Ok(payload) => {
                self.status = SubmitStatus::Submitting;
                Some(payload)
            }
            Err(err) => {
                log::debug!("Event form rejected: {}", err);
                self.status = SubmitStatus::Invalid(err);
                None
            }
        }
    }

    /// Record the outcome. Success clears every field; failure keeps them.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>, now: Instant) {
        match result {
            Ok(()) => {
                log::info!("Event submitted");
                self.fields.clear();
                self.country_input.reset();
                self.status = SubmitStatus::Succeeded { at: now };
            }
            Err(SubmitError::Invalid(err)) => {
                self.status = SubmitStatus::Invalid(err);
            }
            Err(err) => {
                log::warn!("{}", err);
                self.status = SubmitStatus::Failed;
            }
        }
    }

    /// Expire the success confirmation. Returns true if it was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let SubmitStatus::Succeeded { at } = self.status {
            if now.saturating_duration_since(at) >= CONFIRMATION_DURATION {
                self.status = SubmitStatus::Idle;
                return true;
            }
        }
        false
    }

    /// Time left on the confirmation, for scheduling a repaint
    pub fn confirmation_remaining(&self, now: Instant) -> Option<Duration> {
        match self.status {
            SubmitStatus::Succeeded { at } => {
                Some(CONFIRMATION_DURATION.saturating_sub(now.saturating_duration_since(at)))
            }
            _ => None,
        }
    }

    /// Message to show under the form, if any
    pub fn message(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Succeeded { .. } => Some(SUCCESS_MESSAGE.to_string()),
            SubmitStatus::Failed => Some(FAILURE_MESSAGE.to_string()),
            SubmitStatus::Invalid(err) => Some(err.to_string()),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Impact;
    use crate::models::event_form::FormField;
    use crate::services::api::MockEventsApi;
    use pretty_assertions::assert_eq;

    fn catalog() -> CountryCatalog {
        CountryCatalog::from_json(r#"[{"name": "Japan", "code": "JP", "region": "Asia"}]"#).unwrap()
    }

    fn filled() -> EventFormFields {
        EventFormFields {
            date: "2024-03-19".into(),
            time: "03:00".into(),
            country: "Japan".into(),
            event: "BoJ Rate Decision".into(),
            forecast: "0.0%".into(),
            impact: Some(Impact::High),
            ..EventFormFields::default()
        }
    }

    #[test]
    fn test_submitter_posts_valid_form() {
        let mut api = MockEventsApi::new();
        api.expect_create_event()
            .withf(|event: &NewEconomicEvent| event.country == "Japan" && event.forecast == "0.0%")
            .times(1)
            .returning(|_| Ok(()));

        let submitter = EventFormSubmitter::new(Arc::new(api));
        assert_eq!(submitter.submit(&filled(), &catalog()), Ok(()));
    }

    #[test]
    fn test_invalid_form_makes_no_request() {
        let mut api = MockEventsApi::new();
        api.expect_create_event().times(0);

        let submitter = EventFormSubmitter::new(Arc::new(api));
        let mut fields = filled();
        fields.impact = None;
        assert_eq!(
            submitter.submit(&fields, &catalog()),
            Err(SubmitError::Invalid(FormError::Missing(FormField::Impact)))
        );
    }

    #[test]
    fn test_success_resets_fields_and_confirms() {
        let mut state = EventFormState { fields: filled(), ..EventFormState::default() };
        state.country_input.query = "Japan".into();

        assert!(state.begin_submit(&catalog()).is_some());
        assert!(state.is_submitting());
        assert!(state.begin_submit(&catalog()).is_none());

        let now = Instant::now();
        state.finish_submit(Ok(()), now);
        assert!(state.fields.is_empty());
        assert_eq!(state.country_input.query, "");
        assert_eq!(state.message().as_deref(), Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn test_confirmation_clears_after_three_seconds() {
        let mut state = EventFormState::new();
        let start = Instant::now();
        state.finish_submit(Ok(()), start);

        assert!(!state.tick(start + Duration::from_millis(2999)));
        assert_eq!(
            state.confirmation_remaining(start + Duration::from_secs(2)),
            Some(Duration::from_secs(1))
        );
        assert!(state.tick(start + CONFIRMATION_DURATION));
        assert_eq!(state.status(), &SubmitStatus::Idle);
        assert_eq!(state.message(), None);
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut state = EventFormState { fields: filled(), ..EventFormState::default() };
        state.begin_submit(&catalog()).unwrap();
        state.finish_submit(Err(SubmitError::Api(ApiError::Status(500))), Instant::now());

        assert_eq!(state.fields, filled());
        assert!(state.message().unwrap().contains("Error"));
        assert!(!state.tick(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_invalid_form_reports_field() {
        let mut state = EventFormState::new();
        assert!(state.begin_submit(&catalog()).is_none());
        assert_eq!(state.message().as_deref(), Some("Date is required"));
    }
}
