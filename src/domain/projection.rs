// Canonical data projections over a validated forecast
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::forecast::{TimeSeriesEntry, WeatherFeature};

/// One canonical projection over the time series.
///
/// This closed set replaces free-form expression evaluation: an
/// interpreted query can only ever select from these transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Temperature,
    Humidity,
    Wind,
    Precipitation,
    CloudCover,
    Pressure,
    Current,
    Slice(usize),
}

/// What a query interprets to: one projection, or an ordered composite
/// when several independent topics matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionSpec {
    Single(Projection),
    Composite(Vec<Projection>),
}

/// A row of projected fields. Only the fields the projection selects are
/// set; the rest are omitted from the serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedPoint {
    pub time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precipitation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_cover: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,
}

impl ProjectedPoint {
    fn at(time: DateTime<Utc>) -> Self {
        Self {
            time,
            temperature: None,
            humidity: None,
            wind_speed: None,
            wind_direction: None,
            precipitation: None,
            cloud_cover: None,
            pressure: None,
        }
    }
}

/// Result of applying a projection. Serializes untagged so the wire
/// shapes stay what callers of the original API expect: an object for a
/// verbatim entry, arrays for sequences, null when nothing qualifies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectionValue {
    Points(Vec<ProjectedPoint>),
    Entry(TimeSeriesEntry),
    Entries(Vec<TimeSeriesEntry>),
    Composite(Vec<ProjectionValue>),
    Missing,
}

impl Projection {
    /// Apply this projection to a validated feature. Pure: no clock, no
    /// I/O. Note that `Current` reads the raw first entry, unlike the
    /// current-weather endpoint which filters to future entries first.
    pub fn apply(self, feature: &WeatherFeature) -> ProjectionValue {
        let series = &feature.properties.timeseries;
        match self {
            Self::Temperature => points(series, |entry, point| {
                point.temperature = Some(entry.data.instant.details.air_temperature);
            }),
            Self::Humidity => points(series, |entry, point| {
                point.humidity = Some(entry.data.instant.details.relative_humidity);
            }),
            Self::Wind => points(series, |entry, point| {
                point.wind_speed = Some(entry.data.instant.details.wind_speed);
                point.wind_direction = Some(entry.data.instant.details.wind_from_direction);
            }),
            Self::Precipitation => ProjectionValue::Points(
                series
                    .iter()
                    .filter_map(|entry| {
                        let amount = entry
                            .data
                            .next_1_hours
                            .as_ref()
                            .and_then(|f| f.details.precipitation_amount)?;
                        (amount > 0.0).then(|| {
                            let mut point = ProjectedPoint::at(entry.time);
                            point.precipitation = Some(amount);
                            point
                        })
                    })
                    .collect(),
            ),
            Self::CloudCover => points(series, |entry, point| {
                point.cloud_cover = Some(entry.data.instant.details.cloud_area_fraction);
            }),
            Self::Pressure => points(series, |entry, point| {
                point.pressure = Some(entry.data.instant.details.air_pressure_at_sea_level);
            }),
            Self::Current => series
                .first()
                .map_or(ProjectionValue::Missing, |entry| {
                    ProjectionValue::Entry(entry.clone())
                }),
            Self::Slice(count) => {
                ProjectionValue::Entries(series.iter().take(count).cloned().collect())
            }
        }
    }
}

fn points(
    series: &[TimeSeriesEntry],
    fill: impl Fn(&TimeSeriesEntry, &mut ProjectedPoint),
) -> ProjectionValue {
    ProjectionValue::Points(
        series
            .iter()
            .map(|entry| {
                let mut point = ProjectedPoint::at(entry.time);
                fill(entry, &mut point);
                point
            })
            .collect(),
    )
}

impl ProjectionSpec {
    pub fn apply(&self, feature: &WeatherFeature) -> ProjectionValue {
        match self {
            Self::Single(projection) => projection.apply(feature),
            Self::Composite(projections) => ProjectionValue::Composite(
                projections.iter().map(|p| p.apply(feature)).collect(),
            ),
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Humidity => write!(f, "humidity"),
            Self::Wind => write!(f, "wind"),
            Self::Precipitation => write!(f, "precipitation"),
            Self::CloudCover => write!(f, "cloudCover"),
            Self::Pressure => write!(f, "pressure"),
            Self::Current => write!(f, "current"),
            Self::Slice(count) => write!(f, "slice:{count}"),
        }
    }
}

impl fmt::Display for ProjectionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(projection) => write!(f, "{projection}"),
            Self::Composite(projections) => {
                write!(f, "[")?;
                for (i, projection) in projections.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{projection}")?;
                }
                write!(f, "]")
            }
        }
    }
}
