//! Configuration management for the `WeatherChat` core
//!
//! Handles loading configuration from environment variables and provides
//! validation for all configuration settings.

use crate::WeatherChatError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Root configuration structure for the `WeatherChat` core
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherChatConfig {
    /// Weather API configuration
    pub weather: WeatherConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// WeatherAPI.com API key. An empty key is accepted but every live
    /// request will fail and the service will serve synthetic data.
    #[serde(default)]
    pub api_key: String,
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
    /// Forecast window requested from the provider
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_forecast_days() -> u8 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherChatConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: String::new(),
                base_url: default_weather_base_url(),
                timeout_seconds: default_weather_timeout(),
                forecast_days: default_forecast_days(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
        }
    }
}

impl WeatherChatConfig {
    /// Load configuration from `WEATHERCHAT_`-prefixed environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(api_key) = env::var("WEATHERCHAT_API_KEY") {
            config.weather.api_key = api_key;
        }
        if let Ok(base_url) = env::var("WEATHERCHAT_BASE_URL") {
            config.weather.base_url = base_url;
        }
        if let Ok(timeout) = env::var("WEATHERCHAT_TIMEOUT_SECONDS") {
            config.weather.timeout_seconds = timeout
                .parse()
                .with_context(|| format!("Invalid WEATHERCHAT_TIMEOUT_SECONDS: {timeout}"))?;
        }
        if let Ok(level) = env::var("WEATHERCHAT_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.weather.forecast_days == 0 {
            self.weather.forecast_days = default_forecast_days();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if !self.weather.api_key.is_empty() && self.weather.api_key.len() > 100 {
            return Err(WeatherChatError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        if self.weather.timeout_seconds > 300 {
            return Err(
                WeatherChatError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.weather.forecast_days > 14 {
            return Err(WeatherChatError::config(
                "Forecast window cannot exceed 14 days (provider limit)",
            )
            .into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherChatError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(WeatherChatError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

impl LoggingConfig {
    /// Install a global tracing subscriber honoring the configured level.
    /// `RUST_LOG` takes precedence when set. Safe to call once per process;
    /// subsequent calls are ignored.
    pub fn init(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.clone()));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init();
    }
}
