// Module exports for models

pub mod country;
pub mod event;
pub mod event_form;
pub mod filter;
pub mod settings;
