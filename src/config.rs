//! # Runtime Configuration
//!
//! Settings read from the environment at startup.
//!
//! # Environment Variables
//!
//! - `PORT` - TCP port to listen on (default `5000`)
//! - `HOST` - Address to bind (default `0.0.0.0`)
//! - `APP_ENV` - `development` turns on debug mode
//! - `RUST_LOG` - Overrides the default log filter

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use tracing::debug;

use crate::utils::constant::{DEFAULT_HOST, DEFAULT_PORT, DEVELOPMENT_ENV};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value `{0}`")]
    InvalidPort(String),

    #[error("invalid HOST value `{0}`")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Development mode: verbose, human-readable logs.
    pub debug: bool,
    /// Explicit log filter, taken from `RUST_LOG`.
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST
                .parse()
                .map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.to_string()))?,
        };

        let debug = lookup("APP_ENV")
            .is_some_and(|app_env| app_env.trim().eq_ignore_ascii_case(DEVELOPMENT_ENV));

        let log_filter = lookup("RUST_LOG").filter(|filter| !filter.trim().is_empty());

        let config = Self {
            host,
            port,
            debug,
            log_filter,
        };
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
