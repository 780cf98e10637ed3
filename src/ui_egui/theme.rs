//! Theme module for the calendar window
//!
//! Defines the CalendarTheme structure, including the impact colors used
//! by day cells.

use egui::Color32;

use crate::models::event::Impact;
use crate::models::settings::AppConfig;

/// All colors used by the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,

    /// Calendar grid background, also used for adjacent-month cells
    pub calendar_background: Color32,

    pub today_background: Color32,
    pub today_border: Color32,

    pub day_background: Color32,
    pub day_border: Color32,

    pub header_background: Color32,
    pub header_text: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,

    /// Event chip fills, by impact
    pub impact_high: Color32,
    pub impact_medium: Color32,
    pub impact_low: Color32,
    pub impact_text: Color32,

    pub error_text: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(236, 236, 238),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(229, 234, 242),
            header_text: Color32::from_rgb(45, 55, 72),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            impact_high: Color32::from_rgb(0xFF, 0xF9, 0xD6),
            impact_medium: Color32::from_rgb(0xFF, 0xE6, 0xF0),
            impact_low: Color32::from_rgb(0xF6, 0xF7, 0xF9),
            impact_text: Color32::from_rgb(40, 40, 40),
            error_text: Color32::from_rgb(180, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(34, 34, 36),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 52, 60),
            header_text: Color32::from_rgb(220, 225, 235),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            impact_high: Color32::from_rgb(92, 82, 30),
            impact_medium: Color32::from_rgb(90, 45, 64),
            impact_low: Color32::from_rgb(58, 60, 66),
            impact_text: Color32::from_rgb(240, 240, 240),
            error_text: Color32::from_rgb(255, 120, 120),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.is_dark_theme() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn impact_fill(&self, impact: Impact) -> Color32 {
        match impact {
            Impact::High => self.impact_high,
            Impact::Medium => self.impact_medium,
            Impact::Low => self.impact_low,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
