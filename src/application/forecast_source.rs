// Seam between the use cases and the upstream provider
use async_trait::async_trait;

use crate::domain::error::WeatherError;
use crate::domain::forecast::WeatherFeature;

/// Source of validated forecasts. One retrieval per call; the adapter
/// behind this trait is responsible for schema validation, so services
/// only ever see well-formed features.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch_forecast(&self) -> Result<WeatherFeature, WeatherError>;
}
