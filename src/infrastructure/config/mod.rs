use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::domain::i18n::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // i18n
    pub default_locale: Locale,
    pub messages_dir: Option<PathBuf>,
    // Auditor recorded when a change is made without an authenticated user
    pub app_name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: required("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                    name: "PORT",
                    reason: e.to_string(),
                })?,
            jwt_secret: required("JWT_SECRET")?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            default_locale: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "es_ES".to_string())
                .parse()
                .map_err(|reason| ConfigError::Invalid {
                    name: "DEFAULT_LANGUAGE",
                    reason,
                })?,
            messages_dir: env::var("MESSAGES_DIR").ok().map(PathBuf::from),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "modern-infra".to_string()),
        };

        Ok(config)
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}
