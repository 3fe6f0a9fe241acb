use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_FILTER: &str = "info,flashdeck=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of the configured value.
    pub fn from_settings(environment: Environment, logging: &LoggingSettings) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json || json_from_env,
            filter: if logging.level.trim().is_empty() {
                DEFAULT_FILTER.to_string()
            } else {
                logging.level.clone()
            },
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
