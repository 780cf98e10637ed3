// Settings service - configuration file and environment handling

mod service;

pub use service::{SettingsService, ENV_API_URL, ENV_THEME, ENV_TIMEOUT_SECS};
