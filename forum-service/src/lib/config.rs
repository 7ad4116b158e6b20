use std::env;

use auth::Algorithm;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Token signing secret. Mandatory; the process refuses to start
    /// without it.
    #[serde(default)]
    pub secret: String,

    /// Symmetric signing algorithm name (HS256, HS384, HS512).
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token lifetime in minutes.
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

impl JwtConfig {
    /// Parse the configured algorithm name.
    pub fn algorithm(&self) -> Result<Algorithm, ConfigError> {
        self.algorithm.parse().map_err(|_| {
            ConfigError::Message(format!("unsupported jwt algorithm: {}", self.algorithm))
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expiration_minutes() -> i64 {
    1440
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".to_string()]
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// The jwt secret is deliberately absent from every config file; a
    /// missing or empty secret aborts startup here rather than letting the
    /// service run with a guessable key.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        if config.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must be set (JWT__SECRET environment variable)".to_string(),
            ));
        }
        config.jwt.algorithm()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parses_known_names() {
        let jwt = JwtConfig {
            secret: "s".to_string(),
            algorithm: "HS256".to_string(),
            expiration_minutes: 1440,
        };
        assert!(jwt.algorithm().is_ok());
    }

    #[test]
    fn test_algorithm_rejects_unknown_name() {
        let jwt = JwtConfig {
            secret: "s".to_string(),
            algorithm: "none".to_string(),
            expiration_minutes: 1440,
        };
        assert!(jwt.algorithm().is_err());
    }
}
