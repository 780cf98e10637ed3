// Settings module
// Application configuration: where the events API lives and how to reach it

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the events API, without the `/api/events` path
    pub api_base_url: String,
    /// Client-side request timeout. `None` waits for the network stack.
    pub request_timeout_secs: Option<u64>,
    /// "light" or "dark"
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            theme: "light".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), String> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("API base URL must use http or https: {}", url));
        }
        if self.request_timeout_secs == Some(0) {
            return Err("Request timeout must be greater than 0 seconds".to_string());
        }
        Ok(())
    }

    /// Base URL with surrounding whitespace and trailing slashes removed
    pub fn normalized_base_url(&self) -> String {
        self.api_base_url.trim().trim_end_matches('/').to_string()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.to_lowercase().contains("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), None);
        assert!(!config.is_dark_theme());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = AppConfig::default();
        config.api_base_url = "   ".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = AppConfig {
            request_timeout_secs: Some(0),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_base_url() {
        let config = AppConfig {
            api_base_url: " https://api.example.com/ ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.normalized_base_url(), "https://api.example.com");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("theme = \"Dark\"").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.is_dark_theme());
    }
}
