//! WeatherAPI.com response structures and normalization
//!
//! The payload structs mirror the provider JSON verbatim; any field missing
//! from a response fails deserialization, which the caller treats like any
//! other retrieval failure.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::{ForecastDay, PlaceInfo, WeatherResponse, WeatherSnapshot};
use crate::{Result, WeatherChatError};

#[derive(Debug, Deserialize)]
pub(super) struct ForecastPayload {
    pub location: LocationData,
    pub current: CurrentData,
    pub forecast: ForecastData,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationData {
    pub name: String,
    pub country: String,
    pub region: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct CurrentData {
    pub temp_c: f64,
    pub humidity: u8,
    pub wind_kph: f64,
    pub feelslike_c: f64,
    pub condition: ConditionData,
}

#[derive(Debug, Deserialize)]
pub(super) struct ConditionData {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastData {
    pub forecastday: Vec<ForecastDayData>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ForecastDayData {
    pub date: String,
    pub day: DayData,
}

#[derive(Debug, Deserialize)]
pub(super) struct DayData {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub condition: ConditionData,
}

impl ForecastPayload {
    /// Normalize the raw payload: temperatures and wind rounded to whole
    /// units, forecast days mapped 1:1 in provider order, place metadata
    /// copied through.
    pub(super) fn into_response(self) -> Result<WeatherResponse> {
        let forecast = self
            .forecast
            .forecastday
            .into_iter()
            .map(|entry| {
                let date: NaiveDate = entry.date.parse().map_err(|e| {
                    WeatherChatError::payload(format!(
                        "invalid forecast date '{}': {e}",
                        entry.date
                    ))
                })?;
                Ok(ForecastDay {
                    date,
                    high: entry.day.maxtemp_c.round() as i32,
                    low: entry.day.mintemp_c.round() as i32,
                    condition: entry.day.condition.text.clone(),
                    description: entry.day.condition.text,
                    icon: entry.day.condition.icon,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(WeatherResponse {
            current: WeatherSnapshot {
                location: format!("{}, {}", self.location.name, self.location.country),
                temperature: self.current.temp_c.round() as i32,
                condition: self.current.condition.text.clone(),
                description: self.current.condition.text,
                humidity: self.current.humidity,
                wind_speed: self.current.wind_kph.round() as i32,
                feels_like: self.current.feelslike_c.round() as i32,
                icon: self.current.condition.icon,
            },
            forecast,
            location: PlaceInfo {
                name: self.location.name,
                country: self.location.country,
                region: self.location.region,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(text: &str) -> ConditionData {
        ConditionData {
            text: text.to_string(),
            icon: "//cdn.weatherapi.com/weather/64x64/day/116.png".to_string(),
        }
    }

    fn payload_with_days(dates: &[&str]) -> ForecastPayload {
        ForecastPayload {
            location: LocationData {
                name: "London".to_string(),
                country: "United Kingdom".to_string(),
                region: "City of London, Greater London".to_string(),
            },
            current: CurrentData {
                temp_c: 17.4,
                humidity: 71,
                wind_kph: 14.8,
                feelslike_c: 16.6,
                condition: condition("Partly cloudy"),
            },
            forecast: ForecastData {
                forecastday: dates
                    .iter()
                    .enumerate()
                    .map(|(i, date)| ForecastDayData {
                        date: (*date).to_string(),
                        day: DayData {
                            maxtemp_c: 18.0 + i as f64,
                            mintemp_c: 9.0 + i as f64,
                            condition: condition("Light rain"),
                        },
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_normalization_rounds_to_whole_units() {
        let response = payload_with_days(&["2024-06-10"]).into_response().unwrap();
        assert_eq!(response.current.temperature, 17);
        assert_eq!(response.current.wind_speed, 15);
        assert_eq!(response.current.feels_like, 17);
        assert_eq!(response.current.humidity, 71);
    }

    #[test]
    fn test_current_location_label_combines_name_and_country() {
        let response = payload_with_days(&["2024-06-10"]).into_response().unwrap();
        assert_eq!(response.current.location, "London, United Kingdom");
        assert_eq!(response.location.region, "City of London, Greater London");
    }

    #[test]
    fn test_forecast_days_keep_provider_order() {
        let dates = ["2024-06-10", "2024-06-11", "2024-06-12", "2024-06-13", "2024-06-14"];
        let response = payload_with_days(&dates).into_response().unwrap();
        assert_eq!(response.forecast.len(), 5);
        let mapped: Vec<String> = response
            .forecast
            .iter()
            .map(|day| day.date.to_string())
            .collect();
        assert_eq!(mapped, dates);
    }

    #[test]
    fn test_condition_copied_into_description() {
        let response = payload_with_days(&["2024-06-10"]).into_response().unwrap();
        assert_eq!(response.forecast[0].condition, "Light rain");
        assert_eq!(response.forecast[0].description, "Light rain");
    }

    #[test]
    fn test_invalid_date_is_a_payload_error() {
        let result = payload_with_days(&["not-a-date"]).into_response();
        assert!(matches!(result, Err(WeatherChatError::Payload { .. })));
    }

    #[test]
    fn test_missing_fields_fail_deserialization() {
        let truncated = r#"{"location": {"name": "London"}}"#;
        assert!(serde_json::from_str::<ForecastPayload>(truncated).is_err());
    }
}
