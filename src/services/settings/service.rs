use crate::models::settings::AppConfig;
use anyhow::{anyhow, Context, Result};
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const ENV_API_URL: &str = "ECON_CALENDAR_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "ECON_CALENDAR_TIMEOUT_SECS";
pub const ENV_THEME: &str = "ECON_CALENDAR_THEME";

/// Loads [`AppConfig`].
///
/// Precedence: built-in defaults, then the TOML file, then environment variables.
pub struct SettingsService {
    config_path: Option<PathBuf>,
}

impl SettingsService {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Service bound to the platform config location
    pub fn default_location() -> Self {
        Self::new(resolve_config_path())
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Get the effective configuration
    pub fn load(&self) -> Result<AppConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match self.config_path.as_deref() {
            Some(path) if path.exists() => read_config_file(path)?,
            Some(path) => {
                log::debug!("No config file at {}, using defaults", path.display());
                AppConfig::default()
            }
            None => AppConfig::default(),
        };

        apply_env_overrides(&mut config, lookup);

        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {}", e))?;

        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url;
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.request_timeout_secs = Some(secs),
            Err(_) => log::warn!("Ignoring {}={:?}: not a whole number of seconds", ENV_TIMEOUT_SECS, raw),
        }
    }

    if let Some(theme) = lookup(ENV_THEME).filter(|v| !v.trim().is_empty()) {
        config.theme = theme;
    }
}

fn resolve_config_path() -> Option<PathBuf> {
    #[cfg(debug_assertions)]
    {
        Some(PathBuf::from("econ-calendar.toml"))
    }

    #[cfg(not(debug_assertions))]
    {
        ProjectDirs::from("com", "Ken24T", "EconCalendar")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::DEFAULT_API_BASE_URL;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(Some(dir.path().join("missing.toml")));
        let config = service.load_with_env(no_env).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://events.example.com\"\nrequest_timeout_secs = 15\n",
        )
        .unwrap();

        let config = SettingsService::new(Some(path)).load_with_env(no_env).unwrap();
        assert_eq!(config.api_base_url, "https://events.example.com");
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.theme, "light");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"https://file.example.com\"\n").unwrap();

        let env: HashMap<&str, &str> = [
            (ENV_API_URL, "https://env.example.com"),
            (ENV_TIMEOUT_SECS, "not-a-number"),
            (ENV_THEME, "dark"),
        ]
        .into_iter()
        .collect();

        let config = SettingsService::new(Some(path))
            .load_with_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.request_timeout_secs, None);
        assert!(config.is_dark_theme());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = [1, 2]").unwrap();

        let err = SettingsService::new(Some(path)).load_with_env(no_env).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let service = SettingsService::new(None);
        let result = service.load_with_env(|key| {
            (key == ENV_API_URL).then(|| "localhost:5000".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_process_environment_is_consulted() {
        std::env::set_var(ENV_API_URL, "https://from-process-env.example.com");
        let config = SettingsService::new(None).load();
        std::env::remove_var(ENV_API_URL);

        let config = config.unwrap();
        assert_eq!(config.api_base_url, "https://from-process-env.example.com");
    }

    #[test]
    #[serial]
    fn test_process_environment_absent() {
        std::env::remove_var(ENV_API_URL);
        std::env::remove_var(ENV_TIMEOUT_SECS);
        std::env::remove_var(ENV_THEME);
        let config = SettingsService::new(None).load().unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
