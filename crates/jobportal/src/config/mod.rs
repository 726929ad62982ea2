use std::env;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for dashboard clients.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub api: ApiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let base_url =
            env::var("APP_API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let api = ApiConfig::new(base_url, env::var("APP_API_TOKEN").ok())?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            api,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where and how to reach the portal API.
///
/// The token is passed through opaquely; issuing and refreshing credentials
/// is the portal's concern.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self, ConfigError> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { value: raw });
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            token,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_API_BASE_URL must start with http:// or https:// (got '{value}')")]
    InvalidBaseUrl { value: String },
}
