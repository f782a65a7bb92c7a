// Validated forecast model for the met.no locationforecast compact feed
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::WeatherError;

/// One forecast pull: a GeoJSON-style feature with a point geometry and
/// a chronological time series. Immutable once validated; one instance
/// per upstream request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherFeature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    pub geometry: Geometry,
    pub properties: Properties,
}

/// Literal "Feature" tag; any other value fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureType {
    Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub geometry_type: GeometryType,
    /// Longitude, latitude, altitude. The fixed arity rejects any other shape.
    pub coordinates: [f64; 3],
}

/// Literal "Point" tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryType {
    Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub meta: Meta,
    pub timeseries: Vec<TimeSeriesEntry>,
}

/// Feed metadata. Informational only, but must still validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub updated_at: String,
    pub units: Units,
}

/// Unit label per measured quantity; all seven are required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    pub air_pressure_at_sea_level: String,
    pub air_temperature: String,
    pub cloud_area_fraction: String,
    pub precipitation_amount: String,
    pub relative_humidity: String,
    pub wind_from_direction: String,
    pub wind_speed: String,
}

/// One forecast sample. Ordering is chronological as delivered by
/// upstream; the series is filtered but never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesEntry {
    pub time: DateTime<Utc>,
    pub data: TimeSeriesData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub instant: Instant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_1_hours: Option<ForecastPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_6_hours: Option<ForecastPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_12_hours: Option<ForecastPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instant {
    pub details: InstantDetails,
}

/// Point-in-time measurements; every field is required and numeric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstantDetails {
    pub air_pressure_at_sea_level: f64,
    pub air_temperature: f64,
    pub cloud_area_fraction: f64,
    pub relative_humidity: f64,
    pub wind_from_direction: f64,
    pub wind_speed: f64,
}

/// Forward-looking summary attached to an entry (next 1/6/12 hours)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    pub summary: Summary,
    pub details: ForecastDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub symbol_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation_amount: Option<f64>,
}

impl WeatherFeature {
    /// Validate a decoded JSON value against the expected schema.
    ///
    /// Returns the fully-typed feature, or a `Validation` error describing
    /// the first structural mismatch (missing field, wrong primitive type,
    /// wrong literal tag, wrong coordinate arity). Unknown extra fields are
    /// ignored; the compact feed carries more than this schema reads.
    pub fn validate(value: serde_json::Value) -> Result<Self, WeatherError> {
        serde_json::from_value(value).map_err(|e| WeatherError::Validation(e.to_string()))
    }
}

/// Flat view of the first qualifying entry, with the forecast windows
/// carried over verbatim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub cloud_cover: f64,
    pub pressure: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hour_forecast: Option<ForecastPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_six_hours_forecast: Option<ForecastPeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_twelve_hours_forecast: Option<ForecastPeriod>,
}

impl CurrentWeather {
    pub fn from_entry(entry: &TimeSeriesEntry) -> Self {
        let details = &entry.data.instant.details;
        Self {
            temperature: details.air_temperature,
            humidity: details.relative_humidity,
            wind_speed: details.wind_speed,
            wind_direction: details.wind_from_direction,
            cloud_cover: details.cloud_area_fraction,
            pressure: details.air_pressure_at_sea_level,
            next_hour_forecast: entry.data.next_1_hours.clone(),
            next_six_hours_forecast: entry.data.next_6_hours.clone(),
            next_twelve_hours_forecast: entry.data.next_12_hours.clone(),
        }
    }
}

/// One flattened hour of forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyEntry {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub cloud_cover: f64,
    pub pressure: f64,
    pub precipitation: f64,
    pub symbol: String,
}

impl HourlyEntry {
    /// Flatten an entry; precipitation defaults to 0 and the symbol to
    /// "unknown" when the first-hour window is absent.
    pub fn from_entry(entry: &TimeSeriesEntry) -> Self {
        let details = &entry.data.instant.details;
        let next_hour = entry.data.next_1_hours.as_ref();
        Self {
            time: entry.time,
            temperature: details.air_temperature,
            humidity: details.relative_humidity,
            wind_speed: details.wind_speed,
            wind_direction: details.wind_from_direction,
            cloud_cover: details.cloud_area_fraction,
            pressure: details.air_pressure_at_sea_level,
            precipitation: next_hour
                .and_then(|f| f.details.precipitation_amount)
                .unwrap_or(0.0),
            symbol: next_hour
                .map(|f| f.summary.symbol_code.clone())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> serde_json::Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [24.1052, 56.9496, 11.0]
            },
            "properties": {
                "meta": {
                    "updated_at": "2026-08-07T10:00:00Z",
                    "units": {
                        "air_pressure_at_sea_level": "hPa",
                        "air_temperature": "celsius",
                        "cloud_area_fraction": "%",
                        "precipitation_amount": "mm",
                        "relative_humidity": "%",
                        "wind_from_direction": "degrees",
                        "wind_speed": "m/s"
                    }
                },
                "timeseries": [
                    {
                        "time": "2026-08-07T12:00:00Z",
                        "data": {
                            "instant": {
                                "details": {
                                    "air_pressure_at_sea_level": 1013.2,
                                    "air_temperature": 18.5,
                                    "cloud_area_fraction": 75.0,
                                    "relative_humidity": 55.0,
                                    "wind_from_direction": 180.0,
                                    "wind_speed": 3.4
                                }
                            },
                            "next_1_hours": {
                                "summary": { "symbol_code": "cloudy" },
                                "details": { "precipitation_amount": 0.2 }
                            }
                        }
                    },
                    {
                        "time": "2026-08-07T13:00:00Z",
                        "data": {
                            "instant": {
                                "details": {
                                    "air_pressure_at_sea_level": 1012.8,
                                    "air_temperature": 19.1,
                                    "cloud_area_fraction": 90.0,
                                    "relative_humidity": 60.0,
                                    "wind_from_direction": 190.0,
                                    "wind_speed": 4.0
                                }
                            }
                        }
                    }
                ]
            }
        })
    }

    #[test]
    fn test_validate_accepts_compact_payload() {
        let feature = WeatherFeature::validate(sample_payload()).expect("should validate");
        assert_eq!(feature.geometry.coordinates[1], 56.9496);
        assert_eq!(feature.properties.timeseries.len(), 2);
        assert_eq!(feature.properties.meta.units.wind_speed, "m/s");

        let first = &feature.properties.timeseries[0];
        assert_eq!(first.data.instant.details.air_temperature, 18.5);
        assert!(first.data.next_1_hours.is_some());
        assert!(first.data.next_6_hours.is_none());
    }

    #[test]
    fn test_validate_round_trips() {
        let feature = WeatherFeature::validate(sample_payload()).expect("should validate");
        let serialized = serde_json::to_value(&feature).expect("should serialize");
        let reparsed = WeatherFeature::validate(serialized).expect("should re-validate");
        assert_eq!(feature, reparsed);
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let mut payload = sample_payload();
        payload["properties"]["meta"]["units"]["dew_point_temperature"] = json!("celsius");
        assert!(WeatherFeature::validate(payload).is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_feature_tag() {
        let mut payload = sample_payload();
        payload["type"] = json!("FeatureCollection");
        let err = WeatherFeature::validate(payload).unwrap_err();
        assert!(matches!(err, WeatherError::Validation(_)));
    }

    #[test]
    fn test_validate_rejects_wrong_geometry_tag() {
        let mut payload = sample_payload();
        payload["geometry"]["type"] = json!("Polygon");
        assert!(WeatherFeature::validate(payload).is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_coordinate_arity() {
        let mut payload = sample_payload();
        payload["geometry"]["coordinates"] = json!([24.1052, 56.9496]);
        assert!(WeatherFeature::validate(payload).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_instant_field() {
        let mut payload = sample_payload();
        payload["properties"]["timeseries"][0]["data"]["instant"]["details"]
            .as_object_mut()
            .unwrap()
            .remove("air_temperature");
        let err = WeatherFeature::validate(payload).unwrap_err();
        assert!(err.to_string().contains("air_temperature"));
    }

    #[test]
    fn test_validate_rejects_non_numeric_measurement() {
        let mut payload = sample_payload();
        payload["properties"]["timeseries"][0]["data"]["instant"]["details"]
            ["air_temperature"] = json!("18.5");
        assert!(WeatherFeature::validate(payload).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_unit_label() {
        let mut payload = sample_payload();
        payload["properties"]["meta"]["units"]
            .as_object_mut()
            .unwrap()
            .remove("wind_speed");
        assert!(WeatherFeature::validate(payload).is_err());
    }

    #[test]
    fn test_validate_accepts_empty_timeseries() {
        let mut payload = sample_payload();
        payload["properties"]["timeseries"] = json!([]);
        let feature = WeatherFeature::validate(payload).expect("should validate");
        assert!(feature.properties.timeseries.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_timestamp() {
        let mut payload = sample_payload();
        payload["properties"]["timeseries"][0]["time"] = json!("yesterday");
        assert!(WeatherFeature::validate(payload).is_err());
    }

    #[test]
    fn test_current_weather_from_entry() {
        let feature = WeatherFeature::validate(sample_payload()).unwrap();
        let current = CurrentWeather::from_entry(&feature.properties.timeseries[0]);
        assert_eq!(current.temperature, 18.5);
        assert_eq!(current.pressure, 1013.2);
        assert_eq!(
            current.next_hour_forecast.as_ref().unwrap().summary.symbol_code,
            "cloudy"
        );
        assert!(current.next_six_hours_forecast.is_none());
    }

    #[test]
    fn test_hourly_entry_defaults_without_next_hour_window() {
        let feature = WeatherFeature::validate(sample_payload()).unwrap();
        let hourly = HourlyEntry::from_entry(&feature.properties.timeseries[1]);
        assert_eq!(hourly.precipitation, 0.0);
        assert_eq!(hourly.symbol, "unknown");
        assert_eq!(hourly.temperature, 19.1);
    }

    #[test]
    fn test_hourly_entry_serializes_camel_case() {
        let feature = WeatherFeature::validate(sample_payload()).unwrap();
        let hourly = HourlyEntry::from_entry(&feature.properties.timeseries[0]);
        let value = serde_json::to_value(&hourly).unwrap();
        assert!(value.get("windSpeed").is_some());
        assert!(value.get("cloudCover").is_some());
        assert_eq!(value["precipitation"], json!(0.2));
    }
}
