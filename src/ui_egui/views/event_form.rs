//! "Add event" page.

use chrono::NaiveDate;
use egui::{Color32, RichText, Vec2};
use egui_extras::DatePickerButton;

use crate::models::country::CountryCatalog;
use crate::models::event::Impact;
use crate::services::submit::{EventFormState, SubmitStatus};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::today;

const LABEL_WIDTH: f32 = 90.0;
const MAX_SUGGESTIONS: usize = 8;

/// Render the form. Returns true when the user pressed Submit.
pub fn render_event_form(
    ui: &mut egui::Ui,
    state: &mut EventFormState,
    catalog: &CountryCatalog,
    theme: &CalendarTheme,
) -> bool {
    let submitting = state.is_submitting();
    let mut submit_clicked = false;

    ui.heading("Add Economic Event");
    ui.add_space(8.0);

    egui::Grid::new("event_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .min_col_width(LABEL_WIDTH)
        .show(ui, |ui| {
            ui.label("Date");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut state.fields.date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(110.0),
                );
                let mut picked = NaiveDate::parse_from_str(state.fields.date.trim(), "%Y-%m-%d")
                    .unwrap_or_else(|_| today());
                if ui
                    .add(DatePickerButton::new(&mut picked).id_source("event_form_date"))
                    .changed()
                {
                    state.fields.date = picked.format("%Y-%m-%d").to_string();
                }
            });
            ui.end_row();

            ui.label("Time");
            ui.add(
                egui::TextEdit::singleline(&mut state.fields.time)
                    .hint_text("HH:MM")
                    .desired_width(110.0),
            );
            ui.end_row();

            ui.label("Country");
            render_country_input(ui, state, catalog);
            ui.end_row();

            ui.label("Event");
            ui.add(
                egui::TextEdit::singleline(&mut state.fields.event)
                    .hint_text("e.g. Non-Farm Payrolls")
                    .desired_width(320.0),
            );
            ui.end_row();

            for (label, value) in [
                ("Actual", &mut state.fields.actual),
                ("Previous", &mut state.fields.previous),
                ("Consensus", &mut state.fields.consensus),
                ("Forecast", &mut state.fields.forecast),
            ] {
                ui.label(label);
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text("optional")
                        .desired_width(160.0),
                );
                ui.end_row();
            }

            ui.label("Impact");
            let selected = state
                .fields
                .impact
                .map(|impact| impact.label())
                .unwrap_or("Select impact");
            egui::ComboBox::from_id_source("event_form_impact")
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for impact in Impact::ALL {
                        ui.selectable_value(
                            &mut state.fields.impact,
                            Some(impact),
                            format!("{} {}", impact.label(), "★".repeat(impact.stars())),
                        );
                    }
                });
            ui.end_row();
        });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let label = if submitting { "Submitting..." } else { "Submit" };
        if ui
            .add_enabled(!submitting, egui::Button::new(label).min_size(Vec2::new(110.0, 28.0)))
            .clicked()
        {
            submit_clicked = true;
        }
        if submitting {
            ui.spinner();
        }
    });

    if let Some((message, color)) = status_line(state, theme) {
        ui.add_space(6.0);
        ui.label(RichText::new(message).color(color));
    }

    submit_clicked
}

/// Outcome line under the Submit button, coloured by result
fn status_line(state: &EventFormState, theme: &CalendarTheme) -> Option<(String, Color32)> {
    let color = match state.status() {
        SubmitStatus::Failed | SubmitStatus::Invalid(_) => theme.error_text,
        SubmitStatus::Succeeded { .. } => theme.text_primary,
        SubmitStatus::Idle | SubmitStatus::Submitting => return None,
    };
    state.message().map(|message| (message, color))
}

/// Type-ahead: typing clears the chosen country, picking a suggestion sets it.
fn render_country_input(ui: &mut egui::Ui, state: &mut EventFormState, catalog: &CountryCatalog) {
    ui.vertical(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.country_input.query)
                .hint_text("Start typing a country")
                .desired_width(220.0),
        );
        if response.changed() {
            state.country_input.on_typed(&mut state.fields);
        }

        if state.country_input.open {
            let suggestions = state.country_input.suggestions(catalog);
            if suggestions.is_empty() {
                ui.label(RichText::new("No matching countries").italics().weak());
            }

            let mut picked = None;
            egui::Frame::group(ui.style()).show(ui, |ui| {
                for country in suggestions.iter().take(MAX_SUGGESTIONS) {
                    if ui
                        .selectable_label(false, format!("{} ({})", country.name, country.code))
                        .clicked()
                    {
                        picked = Some((*country).clone());
                    }
                }
                if suggestions.len() > MAX_SUGGESTIONS {
                    ui.label(
                        RichText::new(format!("{} more...", suggestions.len() - MAX_SUGGESTIONS))
                            .small()
                            .weak(),
                    );
                }
            });

            if let Some(country) = picked {
                state.country_input.select(&country, &mut state.fields);
            }
        }
    });
}
