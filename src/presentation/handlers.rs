// HTTP request handlers
use crate::domain::error::WeatherError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct HourlyParams {
    pub hours: Option<i32>,
}

#[derive(Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current conditions from the first future-or-present entry
pub async fn get_current_weather(State(state): State<Arc<AppState>>) -> Response {
    match state.forecast_service.current_weather().await {
        Ok(current) => Json(current).into_response(),
        Err(e) => error_response(e),
    }
}

/// Flattened forecast for the next 1-48 hours (default 24)
pub async fn get_hourly_forecast(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HourlyParams>,
) -> Response {
    let hours = params.hours.unwrap_or(24);
    if !(1..=48).contains(&hours) {
        return error_response(WeatherError::Query(format!(
            "hours must be between 1 and 48, got {hours}"
        )));
    }

    match state.forecast_service.hourly_forecast(hours as usize).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => error_response(e),
    }
}

/// Resolve a restricted field path against the raw forecast document
pub async fn query_weather_data(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Response {
    if request.query.trim().is_empty() {
        return error_response(WeatherError::Query("query must not be empty".to_string()));
    }

    match state.query_service.run_selector(&request.query).await {
        Ok(value) => Json(value).into_response(),
        Err(e) => error_response(e),
    }
}

/// Interpret a free-text question and answer in both languages
pub async fn natural_language_query(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QueryRequest>,
) -> Response {
    if request.query.trim().is_empty() {
        return error_response(WeatherError::Query("query must not be empty".to_string()));
    }

    match state.query_service.natural_language(&request.query).await {
        Ok(answer) => Json(answer).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a pipeline error onto a status code and a JSON error body.
/// Nothing is swallowed: every failure reaches the caller as a message.
fn error_response(err: WeatherError) -> Response {
    let status = match err {
        WeatherError::Fetch(_) | WeatherError::Validation(_) => StatusCode::BAD_GATEWAY,
        WeatherError::NoCurrentData => StatusCode::NOT_FOUND,
        WeatherError::Query(_) => StatusCode::BAD_REQUEST,
    };
    tracing::error!(%status, "Request failed: {err}");
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
