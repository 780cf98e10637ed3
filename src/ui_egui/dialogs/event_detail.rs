//! Read-only details for a single event

use egui::{Margin, RichText, Stroke};

use crate::models::event::{reading_or_dash, EconomicEvent};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_long_date;

/// Render the detail window. `open` is cleared when the user closes it.
pub fn render_event_detail(
    ctx: &egui::Context,
    event: &EconomicEvent,
    theme: &CalendarTheme,
    open: &mut bool,
) {
    let date_text = event
        .calendar_date()
        .map(format_long_date)
        .unwrap_or_else(|| event.date.clone());
    let impact = event.impact_level();

    egui::Window::new("Event Details")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Frame::none()
                .fill(theme.impact_fill(impact))
                .rounding(egui::Rounding::same(6.0))
                .stroke(Stroke::new(1.0, theme.day_border))
                .inner_margin(Margin::same(8.0))
                .show(ui, |ui| {
                    ui.set_min_width(320.0);
                    ui.label(
                        RichText::new(&event.event)
                            .size(16.0)
                            .strong()
                            .color(theme.impact_text),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} impact {}",
                            impact.label(),
                            "★".repeat(impact.stars())
                        ))
                        .color(theme.impact_text),
                    );
                });

            ui.add_space(8.0);

            egui::Grid::new("event_detail_grid")
                .num_columns(2)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    let rows = [
                        ("Date", date_text.as_str()),
                        ("Time", if event.time.is_empty() { "-" } else { event.time.as_str() }),
                        ("Country", event.country.as_str()),
                        ("Actual", reading_or_dash(&event.actual)),
                        ("Previous", reading_or_dash(&event.previous)),
                        ("Consensus", reading_or_dash(&event.consensus)),
                        ("Forecast", reading_or_dash(&event.forecast)),
                    ];
                    for (label, value) in rows {
                        ui.label(RichText::new(label).color(theme.text_secondary));
                        ui.label(value);
                        ui.end_row();
                    }
                });
        });
}
