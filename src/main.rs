// Economic Calendar Application
// Main entry point

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use econ_calendar::models::country::CountryCatalog;
use econ_calendar::services::api::http::HttpEventsApi;
use econ_calendar::services::settings::SettingsService;
use econ_calendar::ui_egui::EconCalendarApp;

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Economic Calendar");

    let settings_service = SettingsService::default_location();
    if let Some(path) = settings_service.config_path() {
        log::info!("Configuration file: {}", path.display());
    }
    let config = settings_service
        .load()
        .context("Failed to load configuration")?;

    let api = HttpEventsApi::new(&config).context("Failed to initialize events API client")?;
    let catalog = CountryCatalog::embedded().context("Failed to parse embedded country list")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Economic Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size(EconCalendarApp::min_window_size()),
        ..Default::default()
    };

    eframe::run_native(
        "Economic Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(EconCalendarApp::new(cc, config, Arc::new(api), catalog)))),
    )
    .map_err(|e| anyhow!("Failed to run application: {}", e))
}
