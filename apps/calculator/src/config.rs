//! Server configuration.
//!
//! Configuration comes from command-line flags (see [`crate::args`]) with
//! fallback to the defaults below. No environment variables are read here.

use serde::Serialize;

use crate::args::Args;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Service name reported by `GET /health`.
pub const DEFAULT_SERVICE_NAME: &str = "go-calculator";

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listening port
    pub port: u16,

    /// Name reported by the health check
    pub service_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Builds and validates the configuration from parsed flags.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let config = ServerConfig {
            host: args.host.trim().to_string(),
            port: args.port,
            service_name: args.service_name.trim().to_string(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingRequired("host".to_string()));
        }
        if self.service_name.is_empty() {
            return Err(ConfigError::MissingRequired("service_name".to_string()));
        }
        if self.host.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue("host".to_string()));
        }
        Ok(())
    }

    /// `host:port`, as passed to the listener.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
