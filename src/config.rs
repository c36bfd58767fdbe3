use dotenv::dotenv;
use std::env;
use thiserror::Error;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("SIMULATION_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub coingecko_base_url: String,
    pub coingecko_api_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub simulation_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            coingecko_api_key: None,
            host: "0.0.0.0".to_string(),
            port: 3000,
            simulation_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Config::default();

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        let simulation_seed = match get("SIMULATION_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            coingecko_base_url: get("COINGECKO_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.coingecko_base_url),
            coingecko_api_key: get("COINGECKO_API_KEY"),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            simulation_seed,
        })
    }
}
