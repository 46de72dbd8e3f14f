//! Weather retrieval with silent degradation
//!
//! The live path issues a single request to the WeatherAPI.com forecast
//! endpoint and normalizes the payload. Every failure mode (network,
//! non-success status, malformed payload) is collapsed at one seam into
//! synthetic data, so the public operations never fail. The underlying cause
//! is still logged for diagnostics.

mod fallback;
mod weatherapi;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::WeatherResponse;
use crate::{Result, WeatherChatError};

/// A fallible source of normalized forecast data.
///
/// This is the seam the never-fail adapter wraps: live clients implement it,
/// tests substitute stubs.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<WeatherResponse>;
}

/// Live WeatherAPI.com client. One outbound request per call, no retries.
pub struct WeatherApiClient {
    client: reqwest::Client,
    config: WeatherConfig,
}

impl WeatherApiClient {
    /// Create a new client. The configured timeout bounds the single
    /// outbound call; an empty API key is accepted here and simply makes
    /// every request fail upstream.
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("weatherchat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ForecastSource for WeatherApiClient {
    #[instrument(skip(self))]
    async fn fetch_forecast(&self, location: &str, days: u8) -> Result<WeatherResponse> {
        let url = format!(
            "{}/forecast.json?key={}&q={}&days={}&aqi=no&alerts=no",
            self.config.base_url,
            self.config.api_key,
            urlencoding::encode(location),
            days
        );
        debug!(
            "Weather API request: {}",
            url.split("key=").next().unwrap_or(&url)
        );

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        debug!("Weather API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherChatError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: weatherapi::ForecastPayload = response
            .json()
            .await
            .map_err(|e| WeatherChatError::payload(e.to_string()))?;

        payload.into_response()
    }
}

/// Weather retrieval service with a never-fail public contract.
///
/// Wraps a [`ForecastSource`] and substitutes synthetic data for any error:
/// the calling agent has no recovery action beyond telling the user, so the
/// service degrades data quality instead of surfacing failures.
pub struct WeatherService<S: ForecastSource = WeatherApiClient> {
    source: S,
    forecast_days: u8,
}

impl WeatherService<WeatherApiClient> {
    /// Service backed by the live WeatherAPI.com client
    pub fn new(config: WeatherConfig) -> Result<Self> {
        let forecast_days = config.forecast_days;
        Ok(Self {
            source: WeatherApiClient::new(config)?,
            forecast_days,
        })
    }
}

impl<S: ForecastSource> WeatherService<S> {
    /// Service backed by an arbitrary source (tests inject stubs here)
    pub fn with_source(source: S, forecast_days: u8) -> Self {
        Self {
            source,
            forecast_days,
        }
    }

    /// Current conditions plus the configured forecast window.
    ///
    /// Never fails: any retrieval error is logged and replaced by a
    /// structurally valid synthetic response.
    pub async fn get_current_weather(&self, location: &str) -> WeatherResponse {
        match self
            .source
            .fetch_forecast(location, self.forecast_days)
            .await
        {
            Ok(response) => {
                info!(
                    "Retrieved live weather for '{}' ({} forecast days)",
                    location,
                    response.forecast.len()
                );
                response
            }
            Err(err) => {
                warn!("Live weather retrieval failed for '{location}', serving synthetic data: {err}");
                fallback::synthetic_response(location, &mut rand::rng())
            }
        }
    }

    /// Same retrieval, with the forecast truncated to the first `days`
    /// entries. Truncation never errors when fewer days are available.
    pub async fn get_forecast(&self, location: &str, days: u8) -> WeatherResponse {
        self.get_current_weather(location)
            .await
            .with_forecast_window(days as usize)
    }
}
