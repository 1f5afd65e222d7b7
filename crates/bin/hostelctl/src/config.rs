//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `hostelctl.toml` in the working directory unless `--config`
//! names another file. Every field has a default so the file is optional.
//! Environment variables take precedence over file values, and the
//! `--api-url` flag over both.

use std::path::Path;

use hostel_adapter_http_reqwest::TransportConfig;
use hostel_app::config::{ApiConfig, DEFAULT_BASE_URL};
use serde::Deserialize;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "hostelctl.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote API settings.
    pub api: ApiSection,
    /// HTTP transport settings.
    pub transport: TransportConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Remote API settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// Base address every request is relative to.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or `hostelctl.toml` if present), apply
    /// environment-variable overrides, then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is malformed, if an explicitly named file
    /// cannot be read, or if an environment override cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("HOSTEL_API_URL") {
            self.api.url = val;
        }
        if let Some(val) = var("HOSTEL_TIMEOUT_SECS") {
            let secs = val.parse::<u64>().map_err(|_| {
                ConfigError::Validation(format!(
                    "HOSTEL_TIMEOUT_SECS must be a whole number of seconds, got {val:?}"
                ))
            })?;
            self.transport.timeout_secs = (secs > 0).then_some(secs);
        }
        if let Some(val) = var("HOSTEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// Replace the API base address (the `--api-url` flag).
    pub fn override_api_url(&mut self, url: impl Into<String>) {
        self.api.url = url.into();
    }

    /// Check the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the API URL is empty or not
    /// an `http`/`https` address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "api url must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "api url must start with http:// or https://, got {url:?}"
            )));
        }
        Ok(())
    }

    /// Return the API base address as the app layer expects it.
    #[must_use]
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api.url.trim())
    }
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "hostelctl=info,hostel_adapter_http_reqwest=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.url, "http://localhost:8000/api");
        assert_eq!(config.transport.timeout_secs, None);
        assert!(config.logging.filter.contains("hostelctl=info"));
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api.url, DEFAULT_BASE_URL);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            url = 'https://hostel.example.com/api'

            [transport]
            timeout_secs = 15
            user_agent = 'front-desk'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.url, "https://hostel.example.com/api");
        assert_eq!(config.transport.timeout_secs, Some(15));
        assert_eq!(config.transport.user_agent, "front-desk");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [transport]
            timeout_secs = 5
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.transport.timeout_secs, Some(5));
        assert!(config.transport.user_agent.starts_with("hostel/"));
        assert_eq!(config.api.url, DEFAULT_BASE_URL);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_default_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent.toml"), false).unwrap();
        assert_eq!(config.api.url, DEFAULT_BASE_URL);
    }

    #[test]
    fn should_fail_when_named_file_not_found() {
        let result = Config::from_file(Path::new("nonexistent.toml"), true);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("HOSTEL_API_URL", "http://10.0.0.5:8000/api"),
                ("HOSTEL_TIMEOUT_SECS", "30"),
                ("HOSTEL_LOG", "warn"),
            ]))
            .unwrap();
        assert_eq!(config.api.url, "http://10.0.0.5:8000/api");
        assert_eq!(config.transport.timeout_secs, Some(30));
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_prefer_rust_log_over_hostel_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("HOSTEL_LOG", "warn"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_clear_timeout_when_env_sets_zero() {
        let mut config = Config::default();
        config.transport.timeout_secs = Some(10);
        config
            .apply_overrides(env(&[("HOSTEL_TIMEOUT_SECS", "0")]))
            .unwrap();
        assert_eq!(config.transport.timeout_secs, None);
    }

    #[test]
    fn should_reject_unparseable_timeout() {
        let mut config = Config::default();
        config.transport.timeout_secs = Some(10);
        let result = config.apply_overrides(env(&[("HOSTEL_TIMEOUT_SECS", "30s")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_let_flag_override_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("HOSTEL_API_URL", "http://env/api")]))
            .unwrap();
        config.override_api_url("http://flag/api");
        assert_eq!(config.api.url, "http://flag/api");
    }

    #[test]
    fn should_accept_default_url() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_empty_url() {
        let mut config = Config::default();
        config.override_api_url("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_non_http_url() {
        let mut config = Config::default();
        config.override_api_url("ftp://hostel/api");
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_build_api_config_without_trailing_slash() {
        let mut config = Config::default();
        config.override_api_url("https://hostel.example.com/api/");
        assert_eq!(
            config.api_config().base_url(),
            "https://hostel.example.com/api"
        );
    }
}
