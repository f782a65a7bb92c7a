// Error taxonomy shared across all layers
use thiserror::Error;

/// Errors surfaced by the weather pipeline
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Transport-level failure reaching the upstream provider
    #[error("Failed to fetch weather data: {0}")]
    Fetch(String),

    /// Upstream payload does not match the expected schema
    #[error("Invalid weather payload: {0}")]
    Validation(String),

    /// No time-series entry qualifies (e.g. the whole series is in the past)
    #[error("No current weather data available")]
    NoCurrentData,

    /// Query text was malformed or addressed nothing
    #[error("Invalid query: {0}")]
    Query(String),
}
