//! Listing of the events hidden behind a cell's "+N more"

use chrono::NaiveDate;
use egui::{Margin, RichText, Stroke, Vec2};

use crate::models::event::EconomicEvent;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_long_date;

pub struct MoreEventsState {
    pub date: NaiveDate,
    pub events: Vec<EconomicEvent>,
}

pub enum MoreEventsAction {
    None,
    OpenEvent(EconomicEvent),
}

pub fn render_more_events(
    ctx: &egui::Context,
    state: &MoreEventsState,
    theme: &CalendarTheme,
    open: &mut bool,
) -> MoreEventsAction {
    let mut action = MoreEventsAction::None;

    egui::Window::new(format!("More events on {}", format_long_date(state.date)))
        .id(egui::Id::new("more_events_dialog"))
        .open(open)
        .collapsible(false)
        .resizable(true)
        .default_width(380.0)
        .max_height(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for event in &state.events {
                        let response = egui::Frame::none()
                            .fill(theme.day_background)
                            .rounding(egui::Rounding::same(6.0))
                            .stroke(Stroke::new(1.0, theme.day_border))
                            .inner_margin(Margin::same(6.0))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    let (rect, _) = ui.allocate_exact_size(
                                        Vec2::new(6.0, 32.0),
                                        egui::Sense::hover(),
                                    );
                                    ui.painter().rect_filled(
                                        rect,
                                        2.0,
                                        theme.impact_fill(event.impact_level()),
                                    );
                                    ui.vertical(|ui| {
                                        ui.label(RichText::new(&event.event).strong());
                                        ui.label(
                                            RichText::new(format!("{}  {}", event.time, event.country))
                                                .small()
                                                .color(theme.text_secondary),
                                        );
                                    });
                                });
                            })
                            .response
                            .interact(egui::Sense::click());

                        if response.clicked() {
                            action = MoreEventsAction::OpenEvent(event.clone());
                        }
                        response.on_hover_cursor(egui::CursorIcon::PointingHand);
                        ui.add_space(4.0);
                    }
                });
        });

    action
}
