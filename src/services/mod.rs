// Service module exports

pub mod api;
pub mod calendar_grid;
pub mod calendar_session;
pub mod event_query;
pub mod events_index;
pub mod settings;
pub mod submit;
