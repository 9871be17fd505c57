//! HTTP server configuration.
//!
//! # Invariants
//! - `api_prefix` is empty or starts with `/` and has no trailing `/`.
//! - `port` is non-zero.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Browser dev-server origins allowed by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://localhost:3000",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:3000",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroPort,
    EmptyHost,
    InvalidApiPrefix(String),
    InvalidCorsOrigin(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPort => write!(f, "port must be non-zero"),
            Self::EmptyHost => write!(f, "host cannot be empty"),
            Self::InvalidApiPrefix(prefix) => write!(
                f,
                "api prefix `{prefix}` must start with `/` and must not end with `/`"
            ),
            Self::InvalidCorsOrigin(origin) => {
                write!(f, "cors origin `{origin}` must be an http(s) origin")
            }
        }
    }
}

impl Error for ConfigError {}

/// Settings for the project HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount point for project routes; `/health` is always unprefixed.
    pub api_prefix: String,
    /// Exact origins echoed back in `Access-Control-Allow-Origin`.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::ZeroPort);
        }
        let prefix = self.api_prefix.as_str();
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            return Err(ConfigError::InvalidApiPrefix(self.api_prefix.clone()));
        }
        for origin in &self.cors_origins {
            let valid_scheme = origin.starts_with("http://") || origin.starts_with("https://");
            if !valid_scheme || origin.ends_with('/') {
                return Err(ConfigError::InvalidCorsOrigin(origin.clone()));
            }
        }
        Ok(())
    }
}
