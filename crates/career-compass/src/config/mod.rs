use crate::workflows::progression::{IndustryContext, OpenAiNarratorConfig};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recommendations: RecommendationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let industry_raw = env::var("APP_INDUSTRY").unwrap_or_else(|_| "Technology".to_string());
        let default_industry = industry_raw
            .parse::<IndustryContext>()
            .map_err(|_| ConfigError::InvalidIndustry(industry_raw.clone()))?;

        let narrative = match env::var("APP_NARRATIVE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => {
                let timeout_secs = env::var("APP_NARRATIVE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNarrativeTimeout)?;

                Some(OpenAiNarratorConfig {
                    base_url: base_url.trim().to_string(),
                    api_key: env::var("APP_NARRATIVE_API_KEY").unwrap_or_default(),
                    model: env::var("APP_NARRATIVE_MODEL")
                        .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            _ => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recommendations: RecommendationConfig {
                default_industry,
                narrative,
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Batch defaults and the optional narrative backend.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub default_industry: IndustryContext,
    /// `None` when `APP_NARRATIVE_URL` is unset; narratives are then reported as unavailable.
    pub narrative: Option<OpenAiNarratorConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidIndustry(String),
    InvalidNarrativeTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidIndustry(value) => {
                write!(f, "APP_INDUSTRY '{value}' is not a supported industry")
            }
            ConfigError::InvalidNarrativeTimeout => {
                write!(f, "APP_NARRATIVE_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidIndustry(_)
            | ConfigError::InvalidNarrativeTimeout => None,
        }
    }
}
