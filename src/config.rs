//! Application configuration loaded from environment variables.

use chrono::{FixedOffset, Offset, Utc};
use std::env;

use crate::time_utils::offset_from_minutes;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_MAX_ACTIVITIES: usize = 10_000;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Offset used to place "now" on the calendar when a request omits it
    pub default_offset: FixedOffset,
    /// Upper bound on records accepted in one request
    pub max_activities: usize,
}

impl Config {
    /// Config for tests: UTC, default port and limits.
    pub fn test_default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            port: DEFAULT_PORT,
            default_offset: Utc.fix(),
            max_activities: DEFAULT_MAX_ACTIVITIES,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let offset_minutes: i32 = parse_var("KELP_UTC_OFFSET_MINUTES", 0)?;
        let default_offset = offset_from_minutes(offset_minutes).ok_or_else(|| {
            ConfigError::Invalid(
                "KELP_UTC_OFFSET_MINUTES",
                format!("{offset_minutes} is outside -1439..=1439"),
            )
        })?;

        let max_activities: usize = parse_var("KELP_MAX_ACTIVITIES", DEFAULT_MAX_ACTIVITIES)?;
        if max_activities == 0 {
            return Err(ConfigError::Invalid(
                "KELP_MAX_ACTIVITIES",
                "must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            default_offset,
            max_activities,
        })
    }
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::Invalid(name, e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
