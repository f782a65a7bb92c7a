// Infrastructure layer - configuration and the upstream adapter
pub mod config;
pub mod met_client;
