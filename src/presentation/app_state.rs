// Application state for HTTP handlers
use crate::application::forecast_service::ForecastService;
use crate::application::query_service::QueryService;

#[derive(Clone)]
pub struct AppState {
    pub forecast_service: ForecastService,
    pub query_service: QueryService,
}
