pub mod event_form;
mod month_day_cell;
pub mod month_view;
mod palette;
