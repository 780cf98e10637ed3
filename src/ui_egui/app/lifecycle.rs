use std::time::{Duration as StdDuration, Instant};

use super::{EconCalendarApp, Page};
use crate::ui_egui::dialogs::country_picker::{render_country_picker, CountryPickerAction};
use crate::ui_egui::dialogs::event_detail::render_event_detail;
use crate::ui_egui::dialogs::more_events::{render_more_events, MoreEventsAction, MoreEventsState};
use crate::ui_egui::views::event_form::render_event_form;
use crate::ui_egui::views::month_view::{MonthView, MonthViewAction};

const POLL_INTERVAL: StdDuration = StdDuration::from_millis(200);

impl EconCalendarApp {
    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_workers(ctx);

        self.render_top_bar(ctx);
        self.render_main_panel(ctx);
        self.render_dialogs(ctx);

        self.toast_manager.render(ctx, self.active_theme.is_dark);
    }

    /// Drain finished background work; called once per frame.
    fn poll_workers(&mut self, ctx: &egui::Context) {
        for finished in self.fetch_worker.poll() {
            let applied = self.session.apply_response(finished.seq, finished.result);
            if applied {
                if let Some(message) = self.session.load_state().failure() {
                    log::debug!("Load failure surfaced: {}", message);
                    self.toast_manager.warning("Could not load events");
                }
            }
        }

        if let Some(result) = self.submit_worker.poll() {
            let succeeded = result.is_ok();
            self.form.finish_submit(result, Instant::now());
            if succeeded {
                if let Some(message) = self.form.message() {
                    self.toast_manager.success(message);
                }
                // The new event may belong to the month on screen
                let ticket = self.session.refresh();
                self.dispatch_fetch(Some(ticket));
            }
        }

        let now = Instant::now();
        self.form.tick(now);

        if self.fetch_worker.is_busy() || self.submit_worker.is_pending() {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else if let Some(remaining) = self.form.confirmation_remaining(now) {
            ctx.request_repaint_after(remaining);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Economic Calendar");
                ui.separator();
                ui.selectable_value(&mut self.page, Page::Calendar, "Calendar");
                ui.selectable_value(&mut self.page, Page::AddEvent, "Add Event");
            });
            if self.page == Page::Calendar {
                ui.separator();
                self.render_calendar_toolbar(ui);
            }
            ui.add_space(4.0);
        });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Calendar => {
                let action = egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| MonthView::show(ui, self.session.index(), &self.active_theme))
                    .inner;

                match action {
                    MonthViewAction::None => {}
                    MonthViewAction::OpenEvent(event) => {
                        self.detail_event = Some(event);
                    }
                    MonthViewAction::ShowMore { date, events } => {
                        self.more_events = Some(MoreEventsState { date, events });
                    }
                }
            }
            Page::AddEvent => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let submit = render_event_form(ui, &mut self.form, &self.catalog, &self.active_theme);
                    if submit {
                        if let Some(payload) = self.form.begin_submit(&self.catalog) {
                            self.submit_worker.dispatch(payload);
                        }
                    }
                });
            }
        });
    }

    fn render_dialogs(&mut self, ctx: &egui::Context) {
        if let CountryPickerAction::Save(codes) =
            render_country_picker(ctx, &mut self.country_picker, &self.catalog, &self.active_theme)
        {
            let ticket = self.session.set_countries(codes);
            self.dispatch_fetch(ticket);
        }

        if let Some(state) = &self.more_events {
            let mut open = true;
            let action = render_more_events(ctx, state, &self.active_theme, &mut open);
            if let MoreEventsAction::OpenEvent(event) = action {
                self.detail_event = Some(event);
            }
            if !open {
                self.more_events = None;
            }
        }

        if let Some(event) = &self.detail_event {
            let mut open = true;
            render_event_detail(ctx, event, &self.active_theme, &mut open);
            if !open {
                self.detail_event = None;
            }
        }
    }
}
