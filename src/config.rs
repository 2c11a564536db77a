//! Service configuration loaded from environment variables.
//!
//! - `HOST` - bind address (default: 0.0.0.0)
//! - `PORT` - listen port (default: 5000)
//! - `CLIENT_BUILD_DIR` - directory holding the built single-page client
//!   (default: client/build)
//! - `{USERS,PRODUCTS,ORDERS}_MAX_DELAY_MS` - upper bound of the simulated
//!   latency per endpoint (defaults: 500, 300, 1000)
//! - `{USERS,PRODUCTS,ORDERS}_FAILURE_RATE` - probability of an injected
//!   failure per endpoint (defaults: 0.05, 0.0, 0.1)
//! - `CHAOS_SEED` - fixes the random sequence; unset means seeded from entropy

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::domain::fault::FaultProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChaosConfig {
    pub users: FaultProfile,
    pub products: FaultProfile,
    pub orders: FaultProfile,
    pub seed: Option<u64>,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            users: FaultProfile::users(),
            products: FaultProfile::products(),
            orders: FaultProfile::orders(),
            seed: None,
        }
    }
}

impl ChaosConfig {
    /// Every endpoint answers immediately and never fails.
    pub fn calm() -> Self {
        Self {
            users: FaultProfile::none(),
            products: FaultProfile::none(),
            orders: FaultProfile::none(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub client_build_dir: PathBuf,
    pub chaos: ChaosConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing keys
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ChaosConfig::default();

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            client_build_dir: lookup("CLIENT_BUILD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("client/build")),
            chaos: ChaosConfig {
                users: profile(&lookup, "USERS", defaults.users)?,
                products: profile(&lookup, "PRODUCTS", defaults.products)?,
                orders: profile(&lookup, "ORDERS", defaults.orders)?,
                seed: lookup("CHAOS_SEED")
                    .map(|raw| parse("CHAOS_SEED", &raw))
                    .transpose()?,
            },
        })
    }
}

fn profile<F>(lookup: &F, prefix: &str, default: FaultProfile) -> Result<FaultProfile, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let delay_key = format!("{}_MAX_DELAY_MS", prefix);
    let rate_key = format!("{}_FAILURE_RATE", prefix);

    let max_delay_ms = parse_or(lookup, &delay_key, default.max_delay.as_millis() as u64)?;
    let failure_rate: f64 = parse_or(lookup, &rate_key, default.failure_rate)?;
    if !(0.0..=1.0).contains(&failure_rate) {
        return Err(ConfigError::InvalidEnvVar(
            rate_key,
            format!("{} is not a probability between 0 and 1", failure_rate),
        ));
    }

    Ok(FaultProfile::new(
        Duration::from_millis(max_delay_ms),
        failure_rate,
    ))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse(key, &raw),
        None => Ok(default),
    }
}

fn parse<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
