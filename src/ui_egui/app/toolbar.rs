use egui::RichText;

use super::EconCalendarApp;
use crate::models::country::CountryCatalog;
use crate::models::filter::ImpactFilter;
use crate::utils::date::MONTH_NAMES;

impl EconCalendarApp {
    /// Month navigation plus the impact and country filters.
    pub(super) fn render_calendar_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("◀").on_hover_text("Previous month").clicked() {
                let ticket = self.session.previous_month();
                self.dispatch_fetch(ticket);
            }

            let month = self.session.month();
            let mut selected_month = month.month();
            egui::ComboBox::from_id_source("toolbar_month")
                .selected_text(month.to_string())
                .width(150.0)
                .show_ui(ui, |ui| {
                    for (i, name) in MONTH_NAMES.iter().enumerate() {
                        ui.selectable_value(&mut selected_month, i as u32 + 1, *name);
                    }
                });
            if selected_month != month.month() {
                let ticket = self.session.select_month(selected_month);
                self.dispatch_fetch(ticket);
            }

            if ui.button("▶").on_hover_text("Next month").clicked() {
                let ticket = self.session.next_month();
                self.dispatch_fetch(ticket);
            }

            if ui.button("Today").clicked() {
                let ticket = self.session.go_to_today();
                self.dispatch_fetch(ticket);
            }

            ui.separator();

            ui.label("Impact:");
            let current = self.session.filters().selected_impact();
            let mut impact = current;
            egui::ComboBox::from_id_source("toolbar_impact")
                .selected_text(impact_text(current))
                .show_ui(ui, |ui| {
                    for option in ImpactFilter::OPTIONS {
                        ui.selectable_value(&mut impact, option, impact_text(option));
                    }
                });
            if impact != current {
                let ticket = self.session.set_impact(impact);
                self.dispatch_fetch(ticket);
            }

            let country_label = self.session.filters().countries_label();
            let country_hover =
                country_names(&self.catalog, self.session.filters().selected_countries());
            if ui
                .button(format!("🌐 {}", country_label))
                .on_hover_text(country_hover)
                .clicked()
            {
                let selected = self.session.filters().selected_countries().to_vec();
                self.country_picker.open_with(&selected);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let load_state = self.session.load_state();
                if load_state.is_loading() {
                    ui.spinner();
                    ui.label(RichText::new("Loading...").color(self.active_theme.text_secondary));
                } else if let Some(message) = load_state.failure() {
                    ui.label(RichText::new("Could not load events").color(self.active_theme.error_text))
                        .on_hover_text(format!(
                            "{}\n{}",
                            self.config.normalized_base_url(),
                            message
                        ));
                } else {
                    let total = self.session.index().total();
                    ui.label(
                        RichText::new(format!("{} events", total))
                            .color(self.active_theme.text_secondary),
                    );
                }
            });
        });
    }
}

fn impact_text(filter: ImpactFilter) -> String {
    match filter.stars() {
        0 => filter.label().to_string(),
        stars => format!("{} {}", filter.label(), "★".repeat(stars)),
    }
}

/// Hover text for the country button: one selected country per line
fn country_names(catalog: &CountryCatalog, codes: &[String]) -> String {
    if codes.is_empty() {
        return "All countries".to_string();
    }
    codes
        .iter()
        .map(|code| match catalog.find_by_code(code) {
            Some(country) => country.name.clone(),
            None => code.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
