/**
 * Server Configuration
 *
 * # Configuration Sources
 *
 * Later sources override earlier ones:
 *
 * 1. Built-in defaults (suitable for local development)
 * 2. A TOML file named by `AREACHECK_CONFIG`, if set
 * 3. Environment variables (the server binary loads `.env` into the
 *    environment before calling [`ServerConfig::load`])
 *
 * | Variable                   | Field                      |
 * |----------------------------|----------------------------|
 * | `SERVER_HOST`              | `host`                     |
 * | `SERVER_PORT`              | `port`                     |
 * | `DATABASE_URL`             | `database_url`             |
 * | `DATABASE_MAX_CONNECTIONS` | `database_max_connections` |
 * | `JWT_SECRET`               | `jwt_secret`               |
 * | `BCRYPT_COST`              | `bcrypt_cost`              |
 * | `API_BASE_PATH`            | `api_base_path`            |
 * | `CORS_ORIGINS`             | `cors_origins` (comma-separated) |
 */

use std::{fmt::Display, path::Path, str::FromStr};

use axum::http::HeaderValue;
use serde::Deserialize;
use thiserror::Error;

use crate::backend::auth::passwords::{MAX_COST, MIN_COST};

/// Environment variable naming the optional TOML config file
pub const CONFIG_PATH_ENV: &str = "AREACHECK_CONFIG";

/// Secret used when none is configured. Only fit for local development.
pub const DEV_JWT_SECRET: &str = "areacheck-dev-secret-change-me";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
    /// Prefix for every route, e.g. `/api`. Empty serves at the root.
    pub api_base_path: String,
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://areacheck.db?mode=rwc".to_string(),
            database_max_connections: 5,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            api_base_path: String::new(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the optional TOML file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_PATH_ENV).ok();
        let config = Self::from_sources(file.as_deref().map(Path::new), |key| std::env::var(key).ok())?;

        if config.jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, using the development secret");
        }

        Ok(config)
    }

    /// Build a configuration from an optional TOML file and an environment lookup
    pub fn from_sources<F>(file: Option<&Path>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match file {
            Some(path) => {
                let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })?;
                toml::from_str(&contents)?
            }
            None => Self::default(),
        };

        override_from_env(&env, "SERVER_HOST", &mut config.host)?;
        override_from_env(&env, "SERVER_PORT", &mut config.port)?;
        override_from_env(&env, "DATABASE_URL", &mut config.database_url)?;
        override_from_env(&env, "DATABASE_MAX_CONNECTIONS", &mut config.database_max_connections)?;
        override_from_env(&env, "JWT_SECRET", &mut config.jwt_secret)?;
        override_from_env(&env, "BCRYPT_COST", &mut config.bcrypt_cost)?;
        override_from_env(&env, "API_BASE_PATH", &mut config.api_base_path)?;
        if let Some(origins) = env("CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if !(MIN_COST..=MAX_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::invalid(
                "bcrypt_cost",
                format!("must be between {MIN_COST} and {MAX_COST}"),
            ));
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::invalid("database_max_connections", "must be at least 1"));
        }
        if !self.api_base_path.is_empty()
            && (!self.api_base_path.starts_with('/') || self.api_base_path.ends_with('/'))
        {
            return Err(ConfigError::invalid(
                "api_base_path",
                "must start with '/' and must not end with '/'",
            ));
        }
        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|origin| HeaderValue::from_str(origin).is_err())
        {
            return Err(ConfigError::invalid(
                "cors_origins",
                format!("{origin:?} is not a valid header value"),
            ));
        }
        Ok(())
    }

    /// Address to bind, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn override_from_env<F, T>(env: &F, key: &'static str, field: &mut T) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    if let Some(raw) = env(key) {
        *field = raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(key, e.to_string()))?;
    }
    Ok(())
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn database_max_connections(mut self, max: u32) -> Self {
        self.config.database_max_connections = max;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn api_base_path(mut self, path: impl Into<String>) -> Self {
        self.config.api_base_path = path.into();
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.config.cors_origins = origins;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            message: message.into(),
        }
    }
}
