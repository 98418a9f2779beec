use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "label-service";

#[derive(Debug, Clone)]
pub struct LabelConfig {
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    /// Empty means any origin may call the API.
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
    pub server_selection_timeout_secs: Option<u64>,
}

impl LabelConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(LabelConfig {
            common,
            mongodb: MongoConfig {
                uri: Secret::new(required_env("MONGODB_URI")?),
                database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "Tayco".to_string()),
                server_selection_timeout_secs: optional_env("MONGODB_SERVER_SELECTION_TIMEOUT_SECS")
                    .map(|raw| {
                        raw.parse().map_err(|e| {
                            AppError::ConfigError(anyhow::anyhow!(
                                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS must be a whole number of seconds: {}",
                                e
                            ))
                        })
                    })
                    .transpose()?,
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
            cors_allowed_origins: optional_env("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_origins(&raw))
                .unwrap_or_default(),
        })
    }
}

fn required_env(key: &str) -> Result<String, AppError> {
    optional_env(key).ok_or_else(|| {
        AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
    })
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
