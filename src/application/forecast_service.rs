// Forecast service - current-conditions and hourly-window use cases
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::forecast_source::ForecastSource;
use crate::domain::error::WeatherError;
use crate::domain::forecast::{CurrentWeather, HourlyEntry, WeatherFeature};

#[derive(Clone)]
pub struct ForecastService {
    source: Arc<dyn ForecastSource>,
}

impl ForecastService {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Fetch a fresh forecast and project the current conditions.
    pub async fn current_weather(&self) -> Result<CurrentWeather, WeatherError> {
        let feature = self.source.fetch_forecast().await?;
        current_conditions(&feature, Utc::now())
    }

    /// Fetch a fresh forecast and flatten the next `hours` entries.
    /// Range-checking `hours` is the HTTP boundary's job.
    pub async fn hourly_forecast(&self, hours: usize) -> Result<Vec<HourlyEntry>, WeatherError> {
        let feature = self.source.fetch_forecast().await?;
        Ok(hourly_window(&feature, Utc::now(), hours))
    }
}

/// First entry at or after `now`, flattened. The scan is deliberately
/// literal: if upstream omits the present hour, the next future entry
/// wins. A series entirely in the past is an error, never a default.
pub fn current_conditions(
    feature: &WeatherFeature,
    now: DateTime<Utc>,
) -> Result<CurrentWeather, WeatherError> {
    feature
        .properties
        .timeseries
        .iter()
        .find(|entry| entry.time >= now)
        .map(CurrentWeather::from_entry)
        .ok_or(WeatherError::NoCurrentData)
}

/// Entries at or after `now`, in delivered order, truncated to `count`
/// and flattened. An empty window is valid output.
pub fn hourly_window(
    feature: &WeatherFeature,
    now: DateTime<Utc>,
    count: usize,
) -> Vec<HourlyEntry> {
    feature
        .properties
        .timeseries
        .iter()
        .filter(|entry| entry.time >= now)
        .take(count)
        .map(HourlyEntry::from_entry)
        .collect()
}
