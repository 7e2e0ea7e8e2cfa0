//! Runtime configuration loaded from environment variables
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial release with log level and reminder poll interval

use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 1;
/// Reminders match on the minute, so every minute must see at least one poll
const MAX_POLL_INTERVAL_SECS: u64 = 59;

#[derive(Debug, Clone)]
pub struct Config {
    /// Default `env_logger` filter when `RUST_LOG` is not set
    pub log_level: String,
    /// How often the reminder scheduler checks the clock
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let poll_interval_secs = match lookup("REMINDER_POLL_INTERVAL_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow!("REMINDER_POLL_INTERVAL_SECS must be a positive integer, got '{raw}': {e}")
                })?;
                if secs == 0 || secs > MAX_POLL_INTERVAL_SECS {
                    return Err(anyhow!(
                        "REMINDER_POLL_INTERVAL_SECS must be between 1 and {MAX_POLL_INTERVAL_SECS}, got {secs}"
                    ));
                }
                secs
            }
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        Ok(Config {
            log_level,
            poll_interval: Duration::from_secs(poll_interval_secs),
        })
    }
}
