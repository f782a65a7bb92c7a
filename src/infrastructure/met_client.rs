// Upstream adapter for the met.no locationforecast endpoint
use async_trait::async_trait;

use crate::application::forecast_source::ForecastSource;
use crate::domain::error::WeatherError;
use crate::domain::forecast::WeatherFeature;
use crate::infrastructure::config::UpstreamConfig;

/// HTTP client for the configured forecast endpoint. Built once at
/// startup and shared across requests; the configuration is threaded in
/// explicitly rather than re-read per call.
#[derive(Debug, Clone)]
pub struct MetClient {
    client: reqwest::Client,
    url: String,
    api_key: String,
}

impl MetClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl ForecastSource for MetClient {
    /// One GET with the bearer credential, then schema validation.
    /// No retries; a failure here is terminal for the request.
    async fn fetch_forecast(&self) -> Result<WeatherFeature, WeatherError> {
        tracing::debug!(url = %self.url, "Fetching weather forecast");

        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| WeatherError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Fetch(format!("HTTP {status}")));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WeatherError::Fetch(e.to_string()))?;

        WeatherFeature::validate(payload)
    }
}
