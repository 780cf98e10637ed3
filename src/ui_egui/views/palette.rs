use crate::models::event::Impact;
use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub today_bg: Color32,
    pub adjacent_bg: Color32,
    pub adjacent_text: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub hover_border: Color32,
    pub more_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            today_bg: theme.today_background,
            adjacent_bg: theme.calendar_background,
            adjacent_text: blend(theme.text_secondary, theme.calendar_background, 0.45),
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            more_text: theme.text_secondary,
        }
    }
}

/// Event chip colors, one fill per impact bucket
#[derive(Clone, Copy)]
pub(crate) struct ImpactPalette {
    pub high: Color32,
    pub medium: Color32,
    pub low: Color32,
    pub text: Color32,
    pub outline: Color32,
}

impl ImpactPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            high: theme.impact_high,
            medium: theme.impact_medium,
            low: theme.impact_low,
            text: theme.impact_text,
            outline: with_alpha(theme.day_border, 200),
        }
    }

    pub fn fill(&self, impact: Impact) -> Color32 {
        match impact {
            Impact::High => self.high,
            Impact::Medium => self.medium,
            Impact::Low => self.low,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct HeaderPalette {
    pub bg: Color32,
    pub weekend_bg: Color32,
    pub border: Color32,
    pub text: Color32,
}

impl HeaderPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        let factor = if theme.is_dark { 1.15 } else { 0.92 };
        let scale = |c: u8| ((c as f32 * factor).min(255.0)) as u8;
        let bg = theme.header_background;
        Self {
            bg,
            weekend_bg: Color32::from_rgb(scale(bg.r()), scale(bg.g()), scale(bg.b())),
            border: theme.day_border,
            text: theme.header_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_palette_follows_theme() {
        let theme = CalendarTheme::light();
        let palette = ImpactPalette::from_theme(&theme);
        assert_eq!(palette.fill(Impact::High), theme.impact_high);
        assert_eq!(palette.fill(Impact::Low), theme.impact_low);
    }

    #[test]
    fn test_adjacent_cells_are_dimmed() {
        let theme = CalendarTheme::light();
        let palette = CalendarCellPalette::from_theme(&theme);
        assert_ne!(palette.adjacent_bg, palette.regular_bg);
        assert_ne!(palette.adjacent_text, palette.text);
    }
}
