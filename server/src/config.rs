//! Server configuration, read from environment variables at startup.

use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_CMC_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Origins the browser client is served from during development.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// CoinMarketCap Pro API key (`CMC_API_KEY`).
    pub api_key: String,
    /// CoinMarketCap API root (`CMC_BASE_URL`).
    pub cmc_base_url: String,
    /// Listening socket (`COINBOARD_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("CMC_API_KEY").ok_or(ConfigError::Missing("CMC_API_KEY"))?;

        let cmc_base_url = get("CMC_BASE_URL")
            .unwrap_or_else(|| DEFAULT_CMC_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let bind_addr = match get("COINBOARD_BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "COINBOARD_BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                var: "COINBOARD_BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })?,
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            cmc_base_url,
            bind_addr,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        })
    }
}
