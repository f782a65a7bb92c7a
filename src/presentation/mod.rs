// Presentation layer - HTTP boundary
pub mod app_state;
pub mod handlers;
