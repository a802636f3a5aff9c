//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const MIN_JWT_SECRET_LEN: usize = 32;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration (verification codes)
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyCodeConfig {
    pub ttl_secs: u64,
}

impl VerifyCodeConfig {
    #[must_use]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Outbound mail configuration. With `enabled = false` mails are only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    pub enabled: bool,
    pub api_url: String,
    pub sender: String,
    #[serde(default)]
    pub api_token: String,
    pub timeout_secs: u64,
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    pub path: String,
    pub url_prefix: String,
    pub max_bytes: usize,
}

/// Limits applied to the public user routes, per client IP
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    pub requests_per_second: u64,
    pub burst_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub format: LogFormat,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub verify_code: VerifyCodeConfig,
    pub mail: MailConfig,
    pub file: FileConfig,
    pub rate_limit: RateLimitConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config/default.toml` is missing, a value has the
    /// wrong type or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        let config: Self = Config::builder()
            .add_source(File::with_name("config/default").required(true))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // e.g. APP__JWT__SECRET
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()?;

        config.check()?;
        Ok(config)
    }

    /// Reject values that would only fail later at request time
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` naming the first offending key.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {MIN_JWT_SECRET_LEN} characters"
            )));
        }
        if self.jwt.expires_in_secs <= 0 {
            return Err(ConfigError::Message("jwt.expires_in_secs must be positive".into()));
        }
        if self.verify_code.ttl_secs == 0 {
            return Err(ConfigError::Message("verify_code.ttl_secs must be positive".into()));
        }
        if self.file.max_bytes == 0 {
            return Err(ConfigError::Message("file.max_bytes must be positive".into()));
        }
        if self.rate_limit.requests_per_second == 0 || self.rate_limit.burst_size == 0 {
            return Err(ConfigError::Message(
                "rate_limit values must be positive".into(),
            ));
        }
        Ok(())
    }
}
