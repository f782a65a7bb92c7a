// Domain layer - validated weather model, projections and errors
pub mod error;
pub mod forecast;
pub mod projection;
