//! Tool invocation surface
//!
//! The narrow contract an LLM tool-calling layer consumes: each handler takes
//! plain inputs and returns a `{success, data | error}` envelope. Retrieval
//! handlers lean on the never-fail service contract, so the only failure
//! envelopes produced here come from input validation.

use serde::Serialize;
use tracing::debug;

use crate::models::{ForecastSlice, ParsedQuery, WeatherResponse};
use crate::weather::{ForecastSource, WeatherService};

/// Default forecast window when the caller does not pass one
const DEFAULT_FORECAST_DAYS: u8 = 5;

/// Result-or-error envelope returned by every tool handler
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolOutcome<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ToolOutcome<T> {
    /// Successful outcome carrying a payload
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed outcome carrying a message for the model to relay
    #[must_use]
    pub fn fail<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Current weather for a location string.
pub async fn get_weather<S: ForecastSource>(
    service: &WeatherService<S>,
    location: &str,
) -> ToolOutcome<WeatherResponse> {
    if location.trim().is_empty() {
        return ToolOutcome::fail("Location cannot be empty");
    }

    debug!("Getting weather for: {location}");
    ToolOutcome::ok(service.get_current_weather(location).await)
}

/// Forecast for a location, truncated to `days` (1-5 expected, default 5).
pub async fn get_forecast<S: ForecastSource>(
    service: &WeatherService<S>,
    location: &str,
    days: Option<u8>,
) -> ToolOutcome<ForecastSlice> {
    if location.trim().is_empty() {
        return ToolOutcome::fail("Location cannot be empty");
    }

    let days = days.unwrap_or(DEFAULT_FORECAST_DAYS);
    debug!("Getting forecast for: {location} ({days} days)");

    let response = service.get_forecast(location, days).await;
    ToolOutcome::ok(ForecastSlice {
        location: response.location,
        forecast: response.forecast,
    })
}

/// Parse a user query into its structured intent. Always succeeds.
pub fn parse_query(query: &str) -> ToolOutcome<ParsedQuery> {
    debug!("Parsing query: {query}");
    ToolOutcome::ok(crate::query::parse_query(query))
}
