use chrono::NaiveDate;
use egui::{Margin, Sense, Stroke, Vec2};

use super::palette::{CalendarCellPalette, HeaderPalette, ImpactPalette};
use crate::models::event::EconomicEvent;
use crate::services::calendar_grid::{build_grid, GRID_COLUMNS};
use crate::services::events_index::EventsByDay;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{today, DAY_NAMES};

pub(super) const CELL_HEIGHT: f32 = 88.0;
const HEADER_HEIGHT: f32 = 30.0;
const SPACING: f32 = 2.0;

/// Action returned from month view
#[derive(Debug, Clone, PartialEq)]
pub enum MonthViewAction {
    None,
    /// Open the detail dialog for one event
    OpenEvent(EconomicEvent),
    /// List the events hidden behind "+N more"
    ShowMore {
        date: NaiveDate,
        events: Vec<EconomicEvent>,
    },
}

pub struct MonthView;

impl MonthView {
    pub fn show(ui: &mut egui::Ui, index: &EventsByDay, theme: &CalendarTheme) -> MonthViewAction {
        let month = index.month();
        let today = today();
        let mut action = MonthViewAction::None;

        let total_spacing = SPACING * (GRID_COLUMNS as f32 - 1.0);
        let col_width = ((ui.available_width() - total_spacing) / GRID_COLUMNS as f32).max(40.0);

        let header_palette = HeaderPalette::from_theme(theme);
        egui::Grid::new("month_header_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for (weekday, name) in DAY_NAMES.iter().enumerate() {
                    let is_weekend = weekday == 0 || weekday == 6;
                    let bg = if is_weekend {
                        header_palette.weekend_bg
                    } else {
                        header_palette.bg
                    };

                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(bg)
                                .rounding(egui::Rounding::same(6.0))
                                .stroke(Stroke::new(1.0, header_palette.border))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            egui::RichText::new(*name)
                                                .size(14.0)
                                                .color(header_palette.text)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(5.0);

        let cells = build_grid(month);
        let palette = CalendarCellPalette::from_theme(theme);
        let impact_palette = ImpactPalette::from_theme(theme);

        egui::Grid::new("month_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for row in cells.chunks(GRID_COLUMNS) {
                    for cell in row {
                        if !cell.belongs_to_displayed_month() {
                            Self::render_adjacent_cell(ui, cell.day_number, palette, col_width);
                            continue;
                        }

                        let Some(date) = month.day(cell.day_number) else {
                            continue;
                        };
                        let cell_action = Self::render_day_cell(
                            ui,
                            date,
                            date == today,
                            index.events_on(cell.day_number),
                            palette,
                            impact_palette,
                            col_width,
                        );
                        if cell_action != MonthViewAction::None {
                            action = cell_action;
                        }
                    }
                    ui.end_row();
                }
            });

        action
    }

    /// Day of the previous or next month: dimmed and inert.
    fn render_adjacent_cell(
        ui: &mut egui::Ui,
        day_number: u32,
        palette: CalendarCellPalette,
        col_width: f32,
    ) {
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, palette.adjacent_bg);
        ui.painter().text(
            egui::Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            day_number.to_string(),
            egui::FontId::proportional(14.0),
            palette.adjacent_text,
        );
    }
}
