pub mod config;
pub mod error;
pub mod estimator;
pub mod rates;
pub mod telemetry;
