pub mod config;
pub mod error;
pub mod exam;
pub mod telemetry;
