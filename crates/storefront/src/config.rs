//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, with defaults suited to a local demo:
//! - `ROYAL_DATA_DIR` - Directory for persisted state (default: `./data`)
//! - `ROYAL_ADD_FAILURE_RATE` - Probability in `[0, 1]` that an add-to-cart
//!   attempt is rejected with a transient fault (default: `0.05`)
//! - `ROYAL_RECOMMEND_LIMIT` - Maximum "also liked" suggestions, at least 1
//!   (default: `4`)
//!
//! Invalid values are configuration errors, not silent fallbacks.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_ADD_FAILURE_RATE: f64 = 0.05;
const DEFAULT_RECOMMEND_LIMIT: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Environment variable {0} out of range: {1}")]
    OutOfRange(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Directory holding the JSON state files
    pub data_dir: PathBuf,
    /// Simulated add-to-cart failure probability
    pub add_failure_rate: f64,
    /// Maximum number of recommendations to derive
    pub recommend_limit: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            add_failure_rate: DEFAULT_ADD_FAILURE_RATE,
            recommend_limit: DEFAULT_RECOMMEND_LIMIT,
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but unparsable or out of
    /// its valid range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("ROYAL_DATA_DIR", DEFAULT_DATA_DIR));
        let add_failure_rate = match std::env::var("ROYAL_ADD_FAILURE_RATE") {
            Ok(raw) => parse_failure_rate("ROYAL_ADD_FAILURE_RATE", &raw)?,
            Err(_) => DEFAULT_ADD_FAILURE_RATE,
        };
        let recommend_limit = match std::env::var("ROYAL_RECOMMEND_LIMIT") {
            Ok(raw) => parse_recommend_limit("ROYAL_RECOMMEND_LIMIT", &raw)?,
            Err(_) => DEFAULT_RECOMMEND_LIMIT,
        };

        Ok(Self {
            data_dir,
            add_failure_rate,
            recommend_limit,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a failure rate and validate it lies in `[0, 1]`.
fn parse_failure_rate(key: &str, raw: &str) -> Result<f64, ConfigError> {
    let rate: f64 = raw
        .parse()
        .map_err(|e: std::num::ParseFloatError| {
            ConfigError::InvalidEnvVar(key.to_string(), e.to_string())
        })?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::OutOfRange(
            key.to_string(),
            format!("{rate} is not within [0, 1]"),
        ));
    }
    Ok(rate)
}

/// Parse a recommendation limit and validate it is at least 1.
fn parse_recommend_limit(key: &str, raw: &str) -> Result<usize, ConfigError> {
    let limit: usize = raw
        .parse()
        .map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidEnvVar(key.to_string(), e.to_string())
        })?;
    if limit == 0 {
        return Err(ConfigError::OutOfRange(
            key.to_string(),
            "limit must be at least 1".to_string(),
        ));
    }
    Ok(limit)
}
