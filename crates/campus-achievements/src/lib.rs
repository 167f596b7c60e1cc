pub mod analytics;
pub mod config;
pub mod error;
pub mod notifications;
pub mod records;
pub mod scoring;
pub mod telemetry;
