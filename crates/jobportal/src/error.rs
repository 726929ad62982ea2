use crate::config::ConfigError;
use crate::dashboard::DashboardError;
use crate::telemetry::TelemetryError;

/// Top-level error for binaries built on the dashboard core.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("dashboard error: {0}")]
    Dashboard(#[from] DashboardError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
