//! `WeatherChat` - query understanding and weather retrieval core
//!
//! This library provides the two building blocks of a conversational weather
//! assistant: parsing free-text questions into a structured location/timeframe
//! intent, and retrieving normalized current-plus-forecast weather data with a
//! synthetic fallback when the live provider is unreachable.

pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod tools;
pub mod weather;

// Re-export core types for public API
pub use config::WeatherChatConfig;
pub use error::WeatherChatError;
pub use models::{
    Coordinates, ForecastDay, ForecastSlice, ParsedLocation, ParsedQuery, PlaceInfo, Timeframe,
    WeatherResponse, WeatherSnapshot,
};
pub use query::{parse_location, parse_query, parse_timeframe};
pub use tools::ToolOutcome;
pub use weather::{ForecastSource, WeatherApiClient, WeatherService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherChatError>;
