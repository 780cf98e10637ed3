//! Day cell rendering for the month view.
//!
//! Draws the day number, up to two impact-colored event chips and the
//! "+N more" affordance, and reports clicks back to the month view.

use chrono::NaiveDate;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, MonthViewAction, CELL_HEIGHT};
use super::palette::{CalendarCellPalette, ImpactPalette};
use crate::models::event::EconomicEvent;
use crate::services::events_index::CellEvents;

const CHIP_HEIGHT: f32 = 18.0;
const CHIP_GAP: f32 = 2.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);
            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        is_today: bool,
        events: &[EconomicEvent],
        palette: CalendarCellPalette,
        impact_palette: ImpactPalette,
        col_width: f32,
    ) -> MonthViewAction {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::new(col_width, CELL_HEIGHT), Sense::click());

        let bg_color = if is_today {
            palette.today_bg
        } else {
            palette.regular_bg
        };
        ui.painter().rect_filled(rect, 2.0, bg_color);

        let border = if is_today {
            Stroke::new(2.0, palette.today_border)
        } else {
            Stroke::new(1.0, palette.border)
        };
        ui.painter().rect_stroke(rect, 2.0, border);

        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
            egui::Align2::LEFT_TOP,
            date.format("%-d").to_string(),
            egui::FontId::proportional(14.0),
            palette.text,
        );

        let cell_events = CellEvents::split(events);
        let mut hitboxes: Vec<(Rect, &EconomicEvent)> = Vec::with_capacity(cell_events.shown.len());
        let mut y_offset = 24.0;

        for event in cell_events.shown {
            let chip = Rect::from_min_size(
                Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
                Vec2::new(rect.width() - 6.0, CHIP_HEIGHT),
            );
            ui.painter()
                .rect_filled(chip, 3.0, impact_palette.fill(event.impact_level()));
            ui.painter()
                .rect_stroke(chip, 3.0, Stroke::new(1.0, impact_palette.outline));

            let font_id = egui::FontId::proportional(11.0);
            let title = if event.time.is_empty() {
                event.event.clone()
            } else {
                format!("{} {}", event.time, event.event)
            };
            let title = Self::truncate_single_line_to_width(
                ui,
                &title,
                &font_id,
                impact_palette.text,
                chip.width() - 6.0,
            );
            ui.painter().text(
                Pos2::new(chip.left() + 3.0, chip.center().y),
                egui::Align2::LEFT_CENTER,
                title,
                font_id,
                impact_palette.text,
            );

            hitboxes.push((chip, event));
            y_offset += CHIP_HEIGHT + CHIP_GAP;
        }

        let pointer_pos = ui.input(|i| i.pointer.hover_pos());

        let more_rect = Rect::from_min_size(
            Pos2::new(rect.left() + 3.0, rect.top() + y_offset),
            Vec2::new(rect.width() - 6.0, 14.0),
        );
        let more_label = cell_events.more_label();
        let more_hovered = more_label.is_some()
            && response.hovered()
            && pointer_pos.is_some_and(|pos| more_rect.contains(pos));

        if let Some(label) = &more_label {
            if more_hovered {
                ui.painter().rect_filled(
                    more_rect,
                    2.0,
                    Color32::from_rgba_unmultiplied(
                        palette.today_border.r(),
                        palette.today_border.g(),
                        palette.today_border.b(),
                        50,
                    ),
                );
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            ui.painter().text(
                Pos2::new(more_rect.left() + 2.0, more_rect.top()),
                egui::Align2::LEFT_TOP,
                label,
                egui::FontId::proportional(11.0),
                if more_hovered { palette.text } else { palette.more_text },
            );
        }

        let hovered_event = if response.hovered() {
            pointer_pos.and_then(|pos| {
                hitboxes
                    .iter()
                    .find(|(hit, _)| hit.contains(pos))
                    .map(|(hit, event)| (*hit, *event))
            })
        } else {
            None
        };

        if let Some((hit, event)) = hovered_event {
            ui.painter()
                .rect_stroke(hit.expand(1.0), 3.0, Stroke::new(2.0, palette.hover_border));
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(egui::RichText::new(&event.event).strong());
                ui.label(format!("{} · {}", event.country, event.impact_level().label()));
                ui.label(egui::RichText::new("Click for details").small().weak());
            });
        } else if more_hovered {
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(egui::RichText::new("Hidden events:").strong());
                for event in cell_events.overflow {
                    ui.label(format!("• {} {}", event.time, event.event));
                }
            });
        }

        if response.clicked() {
            if let Some((_, event)) = hovered_event {
                return MonthViewAction::OpenEvent(event.clone());
            }
            if more_hovered {
                return MonthViewAction::ShowMore {
                    date,
                    events: cell_events.overflow.to_vec(),
                };
            }
        }

        MonthViewAction::None
    }
}
