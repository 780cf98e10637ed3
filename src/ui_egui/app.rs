mod lifecycle;
mod toast;
mod toolbar;

use std::sync::Arc;

use self::toast::ToastManager;
use crate::models::country::CountryCatalog;
use crate::models::event::EconomicEvent;
use crate::models::settings::AppConfig;
use crate::services::api::EventsApi;
use crate::services::calendar_session::{CalendarSession, FetchTicket};
use crate::services::event_query::{EventFetchWorker, EventQueryClient};
use crate::services::submit::{EventFormState, EventFormSubmitter, SubmitWorker};
use crate::ui_egui::dialogs::country_picker::CountryPickerState;
use crate::ui_egui::dialogs::more_events::MoreEventsState;
use crate::ui_egui::theme::CalendarTheme;

const MIN_ROOT_WIDTH: f32 = 760.0;
const MIN_ROOT_HEIGHT: f32 = 560.0;

/// Top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Calendar,
    AddEvent,
}

pub struct EconCalendarApp {
    config: AppConfig,
    active_theme: CalendarTheme,
    catalog: CountryCatalog,
    page: Page,
    /// Filters, load state and events of the calendar page
    session: CalendarSession,
    fetch_worker: EventFetchWorker,
    form: EventFormState,
    submit_worker: SubmitWorker,
    country_picker: CountryPickerState,
    /// Event shown in the detail dialog
    detail_event: Option<EconomicEvent>,
    more_events: Option<MoreEventsState>,
    toast_manager: ToastManager,
}

impl eframe::App for EconCalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl EconCalendarApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        api: Arc<dyn EventsApi>,
        catalog: CountryCatalog,
    ) -> Self {
        let active_theme = CalendarTheme::from_config(&config);
        active_theme.apply_to_context(&cc.egui_ctx);

        log::info!(
            "Using events API at {} ({} countries loaded)",
            config.normalized_base_url(),
            catalog.len()
        );

        let mut app = Self {
            config,
            active_theme,
            catalog,
            page: Page::Calendar,
            session: CalendarSession::default(),
            fetch_worker: EventFetchWorker::new(EventQueryClient::new(Arc::clone(&api))),
            form: EventFormState::new(),
            submit_worker: SubmitWorker::new(EventFormSubmitter::new(api)),
            country_picker: CountryPickerState::default(),
            detail_event: None,
            more_events: None,
            toast_manager: ToastManager::new(),
        };

        let ticket = app.session.refresh();
        app.dispatch_fetch(Some(ticket));
        app
    }

    pub fn min_window_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }

    /// Start a fetch if a filter change produced a ticket.
    fn dispatch_fetch(&mut self, ticket: Option<FetchTicket>) {
        if let Some(ticket) = ticket {
            self.fetch_worker.dispatch(ticket);
        }
    }
}
