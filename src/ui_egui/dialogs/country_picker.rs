//! Country filter picker with region tabs and a draft selection.
//!
//! Edits happen on a draft copy of the selected codes. Save hands the draft
//! back to the caller; closing the window throws it away.

use egui::RichText;

use crate::models::country::{CountryCatalog, RegionTab};
use crate::ui_egui::theme::CalendarTheme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryPickerState {
    pub open: bool,
    pub tab: RegionTab,
    draft: Vec<String>,
}

impl Default for CountryPickerState {
    fn default() -> Self {
        Self {
            open: false,
            tab: RegionTab::All,
            draft: Vec::new(),
        }
    }
}

impl CountryPickerState {
    /// Open with the draft seeded from the applied selection
    pub fn open_with(&mut self, selected: &[String]) {
        self.draft = selected.to_vec();
        self.open = true;
    }

    pub fn draft(&self) -> &[String] {
        &self.draft
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.draft.iter().any(|c| c == code)
    }

    pub fn toggle(&mut self, code: &str) {
        if let Some(pos) = self.draft.iter().position(|c| c == code) {
            self.draft.remove(pos);
        } else {
            self.draft.push(code.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Close and hand back the draft
    pub fn save(&mut self) -> Vec<String> {
        self.open = false;
        std::mem::take(&mut self.draft)
    }

    pub fn cancel(&mut self) {
        self.open = false;
        self.draft.clear();
    }
}

pub enum CountryPickerAction {
    None,
    Save(Vec<String>),
}

pub fn render_country_picker(
    ctx: &egui::Context,
    state: &mut CountryPickerState,
    catalog: &CountryCatalog,
    theme: &CalendarTheme,
) -> CountryPickerAction {
    if !state.open {
        return CountryPickerAction::None;
    }

    let mut action = CountryPickerAction::None;
    let mut window_open = true;
    let mut save_clicked = false;

    egui::Window::new("Select Countries")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(true)
        .default_width(460.0)
        .default_height(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for tab in RegionTab::TABS {
                    ui.selectable_value(&mut state.tab, tab, tab.label());
                }
            });
            ui.separator();

            let countries = catalog.in_tab(state.tab);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .max_height(300.0)
                .show(ui, |ui| {
                    if countries.is_empty() {
                        ui.label(RichText::new("No countries in this group").italics());
                    }
                    egui::Grid::new("country_picker_grid")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            for (i, country) in countries.iter().enumerate() {
                                let mut checked = state.is_selected(&country.code);
                                let label = format!("{} ({})", country.name, country.code);
                                if ui.checkbox(&mut checked, label).changed() {
                                    state.toggle(&country.code);
                                }
                                if i % 2 == 1 {
                                    ui.end_row();
                                }
                            }
                        });
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!("{} selected", state.draft().len()))
                        .color(theme.text_secondary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        save_clicked = true;
                    }
                    if ui.button("Clear").clicked() {
                        state.clear();
                    }
                });
            });
        });

    if save_clicked {
        let selection = state.save();
        log::debug!("Country filter saved: {:?}", selection);
        action = CountryPickerAction::Save(selection);
    } else if !window_open {
        state.cancel();
    }

    action
}
