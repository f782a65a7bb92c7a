// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::forecast_service::ForecastService;
use crate::application::query_service::QueryService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::met_client::MetClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_current_weather, get_hourly_forecast, health_check, natural_language_query,
    query_weather_data,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_config()?;

    // Create the upstream client once (infrastructure layer)
    let source = Arc::new(MetClient::new(&config.upstream));

    // Create services (application layer)
    let forecast_service = ForecastService::new(source.clone());
    let query_service = QueryService::new(source);

    // Create application state
    let state = Arc::new(AppState {
        forecast_service,
        query_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/weather/current", get(get_current_weather))
        .route("/weather/hourly", get(get_hourly_forecast))
        .route("/weather/query", post(query_weather_data))
        .route("/weather/natural", post(natural_language_query))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("0.0.0.0:{}", config.server.port).parse()?;
    tracing::info!("Starting weather-gateway service on {addr}");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
