//! Application configuration.
//!
//! The dashboard ships with an embedded TOML document. The API base URL can be
//! fixed at build time through `CATALOG_API_URL`; when it stays empty the base
//! is derived from the page location.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
api_base_url = ""
log_level = "debug"
default_page_size = 10
page_size_options = [10, 20, 50]
search_debounce_ms = 500
request_timeout_ms = 10000
enforce_admin_guard = false
"#;

/// Port the API listens on when the base URL is derived from the page.
const DERIVED_API_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: String,
    pub default_page_size: u32,
    pub page_size_options: Vec<u32>,
    pub search_debounce_ms: u32,
    pub request_timeout_ms: u32,
    pub enforce_admin_guard: bool,
}

impl AppConfig {
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Base URL every API path is appended to, without a trailing slash.
    pub fn api_base(&self) -> String {
        let configured = self.api_base_url.trim().trim_end_matches('/');
        if !configured.is_empty() {
            return configured.to_string();
        }
        derived_api_base()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        parse_config(DEFAULT_CONFIG, None).unwrap_or_else(|_| Self {
            api_base_url: String::new(),
            log_level: "info".to_string(),
            default_page_size: 10,
            page_size_options: vec![10, 20, 50],
            search_debounce_ms: 500,
            request_timeout_ms: 10_000,
            enforce_admin_guard: false,
        })
    }
}

fn parse_config(contents: &str, api_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if let Some(url) = api_override.filter(|u| !u.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }
    if config.default_page_size == 0 {
        config.default_page_size = 10;
    }
    if !config.page_size_options.contains(&config.default_page_size) {
        config.page_size_options.push(config.default_page_size);
        config.page_size_options.sort_unstable();
    }
    Ok(config)
}

/// Load the embedded configuration, applying the build-time API override.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    parse_config(DEFAULT_CONFIG, option_env!("CATALOG_API_URL"))
}

/// `{protocol}//{hostname}:5000/api` for the current page.
fn derived_api_base() -> String {
    let Some(window) = web_sys::window() else {
        return format!("http://127.0.0.1:{DERIVED_API_PORT}/api");
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{protocol}//{hostname}:{DERIVED_API_PORT}/api")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.search_debounce_ms, 500);
        assert!(!config.enforce_admin_guard);
        assert_eq!(config.log_level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_api_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://api.example.com/api/")).unwrap();
        assert_eq!(config.api_base(), "https://api.example.com/api");

        let blank = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(blank.api_base_url, "");
    }

    #[test]
    fn test_default_page_size_is_offered() {
        let raw = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 25");
        let config = parse_config(&raw, None).unwrap();
        assert_eq!(config.page_size_options, vec![10, 20, 25, 50]);
    }

    #[test]
    fn test_bad_log_level() {
        let raw = DEFAULT_CONFIG.replace("\"debug\"", "\"loud\"");
        let config = parse_config(&raw, None).unwrap();
        assert!(config.log_level().is_err());
    }
}
