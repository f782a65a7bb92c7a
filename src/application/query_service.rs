// Query service - raw-path and natural-language use cases
use std::sync::Arc;

use serde::Serialize;

use crate::application::forecast_source::ForecastSource;
use crate::application::formatter::{describe, HumanReadable};
use crate::application::interpreter::interpret;
use crate::application::selector::FieldPath;
use crate::domain::error::WeatherError;
use crate::domain::projection::ProjectionValue;

#[derive(Clone)]
pub struct QueryService {
    source: Arc<dyn ForecastSource>,
}

/// Response envelope for a natural-language query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NaturalLanguageAnswer {
    pub original_query: String,
    pub interpreted_query: String,
    pub result: ProjectionValue,
    pub human_readable: HumanReadable,
}

impl QueryService {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Resolve a raw field path against a fresh forecast. The path is
    /// parsed before anything is fetched, so malformed queries never
    /// cost an upstream call.
    pub async fn run_selector(&self, query: &str) -> Result<serde_json::Value, WeatherError> {
        let path = FieldPath::parse(query)?;
        let feature = self.source.fetch_forecast().await?;
        let document = serde_json::to_value(&feature)
            .map_err(|e| WeatherError::Query(e.to_string()))?;
        path.resolve(&document)
    }

    /// Interpret a free-text question, apply the selected projections to
    /// a fresh forecast, and render the bilingual summary.
    pub async fn natural_language(
        &self,
        query: &str,
    ) -> Result<NaturalLanguageAnswer, WeatherError> {
        let spec = interpret(query);
        let feature = self.source.fetch_forecast().await?;
        let result = spec.apply(&feature);
        let human_readable = describe(query, &result);

        Ok(NaturalLanguageAnswer {
            original_query: query.to_string(),
            interpreted_query: spec.to_string(),
            result,
            human_readable,
        })
    }
}
