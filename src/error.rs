//! Error types and handling for the `WeatherChat` core

use thiserror::Error;

/// Main error type for the `WeatherChat` core
#[derive(Error, Debug)]
pub enum WeatherChatError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network-level failures talking to the weather provider
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Non-success HTTP status from the weather provider, error body captured
    #[error("Weather API error: {status} - {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Provider payload did not have the expected shape
    #[error("Malformed weather payload: {message}")]
    Payload { message: String },
}

impl WeatherChatError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new malformed-payload error
    pub fn payload<S: Into<String>>(message: S) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherChatError::Config { .. } => {
                "Configuration error. Please check your API key settings.".to_string()
            }
            WeatherChatError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherChatError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            WeatherChatError::UpstreamStatus { .. } | WeatherChatError::Payload { .. } => {
                "The weather service returned unusable data for that location.".to_string()
            }
        }
    }
}
