pub mod country_picker;
pub mod event_detail;
pub mod more_events;
