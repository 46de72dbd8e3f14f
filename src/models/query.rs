//! Structured intent extracted from free-text weather queries

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Geographic coordinates
///
/// Reserved for callers that already resolved a place; the text parser never
/// fills this in (no geocoding in this core).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Location extracted from a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedLocation {
    /// City name, when one was recognized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Two-letter uppercase state code; mutually exclusive with `country`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Country name; mutually exclusive with `state`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Display string reconstructed from the matched captures
    pub formatted: String,
}

impl ParsedLocation {
    /// Location with only a city name
    #[must_use]
    pub fn city_only(city: &str) -> Self {
        let city = city.trim();
        Self {
            city: Some(city.to_string()),
            state: None,
            country: None,
            coordinates: None,
            formatted: city.to_string(),
        }
    }

    /// Location with a city and a trailing region token. A region of exactly
    /// two characters is a state code, anything longer is a country.
    #[must_use]
    pub fn with_region(city: &str, region: &str) -> Self {
        let city = city.trim();
        let region = region.trim();
        let is_state = region.len() == 2;
        Self {
            city: Some(city.to_string()),
            state: is_state.then(|| region.to_string()),
            country: (!is_state).then(|| region.to_string()),
            coordinates: None,
            formatted: format!("{city}, {region}"),
        }
    }
}

/// Timeframe intent for a weather query
///
/// `specific` keeps the whole 7-day window and names the weekday the user
/// asked about; [`Timeframe::day_index`] maps that onto a forecast position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Timeframe {
    Current {
        description: String,
    },
    Forecast {
        days: u8,
        description: String,
    },
    Specific {
        days: u8,
        weekday: Weekday,
        description: String,
    },
}

impl Timeframe {
    /// The default timeframe when a query carries no time intent
    #[must_use]
    pub fn current() -> Self {
        Self::Current {
            description: "current weather".to_string(),
        }
    }

    /// Forecast window length, when this timeframe implies one
    #[must_use]
    pub fn days(&self) -> Option<u8> {
        match self {
            Self::Current { .. } => None,
            Self::Forecast { days, .. } | Self::Specific { days, .. } => Some(*days),
        }
    }

    /// Human-readable label for the matched category (display only)
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Current { description }
            | Self::Forecast { description, .. }
            | Self::Specific { description, .. } => description,
        }
    }

    /// Position of the requested weekday inside a forecast window starting at
    /// `today`. First occurrence wins, so asking for today's weekday yields 0.
    /// Returns `None` for non-specific timeframes.
    #[must_use]
    pub fn day_index(&self, today: NaiveDate) -> Option<usize> {
        match self {
            Self::Specific { weekday, .. } => {
                let offset = (weekday.num_days_from_monday() + 7
                    - today.weekday().num_days_from_monday())
                    % 7;
                Some(offset as usize)
            }
            _ => None,
        }
    }
}

/// Full parse result for one query, original text retained for debugging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub location: Option<ParsedLocation>,
    pub timeframe: Timeframe,
    pub original_query: String,
}
