//! Value objects shared across the parsing and retrieval components
//!
//! Everything here is constructed fresh per request and serializes in the
//! camelCase shape the tool-calling layer puts on the wire.

pub mod query;
pub mod weather;

pub use query::{Coordinates, ParsedLocation, ParsedQuery, Timeframe};
pub use weather::{ForecastDay, ForecastSlice, PlaceInfo, WeatherResponse, WeatherSnapshot};
