//! Normalized weather data returned by the retrieval component

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point-in-time weather reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Display label for the resolved place, e.g. "Berlin, Germany"
    pub location: String,
    /// Temperature in whole degrees Celsius
    pub temperature: i32,
    /// Short condition label, e.g. "Partly cloudy"
    pub condition: String,
    /// Longer description; may equal `condition`
    pub description: String,
    /// Relative humidity in percent (0-100)
    pub humidity: u8,
    /// Wind speed in whole km/h
    pub wind_speed: i32,
    /// Feels-like temperature in whole degrees Celsius
    pub feels_like: i32,
    /// Opaque reference to a condition glyph
    pub icon: String,
}

/// Single day of a forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Calendar date, no time component
    pub date: NaiveDate,
    /// Daily high in whole degrees Celsius. `high >= low` is expected but
    /// not enforced; the synthetic generator may invert it.
    pub high: i32,
    /// Daily low in whole degrees Celsius
    pub low: i32,
    pub condition: String,
    pub description: String,
    pub icon: String,
}

/// Metadata for the place the provider resolved the query to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInfo {
    pub name: String,
    pub country: String,
    pub region: String,
}

/// Complete weather answer: current conditions plus a chronological,
/// same-day-first forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResponse {
    pub current: WeatherSnapshot,
    pub forecast: Vec<ForecastDay>,
    pub location: PlaceInfo,
}

impl WeatherResponse {
    /// Keep only the first `days` forecast entries. Truncation, not padding:
    /// asking for more days than available leaves the forecast untouched.
    #[must_use]
    pub fn with_forecast_window(mut self, days: usize) -> Self {
        self.forecast.truncate(days);
        self
    }
}

/// Forecast-only payload served by the forecast tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSlice {
    pub location: PlaceInfo,
    pub forecast: Vec<ForecastDay>,
}
