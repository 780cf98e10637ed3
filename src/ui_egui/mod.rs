mod app;
pub mod dialogs;
pub mod theme;
mod views;

pub use app::{EconCalendarApp, Page};
