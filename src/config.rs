//! Environment-driven configuration.
//!
//! The watcher binary loads everything from the process environment
//! (via dotenvy); tests construct a [`Config`] directly and point it at
//! a local mock server.

use std::env;
use std::time::Duration;

/// Refresh cadence used when `REFRESH_INTERVAL_SECONDS` is unset.
pub const DEFAULT_REFRESH_INTERVAL_SECONDS: u64 = 30;

const DEFAULT_BASE_URL: &str = "https://api.insightease.com";

/// Runtime configuration for the watch service.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub refresh_interval: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Config {
    /// Config with default cadence and timeouts.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECONDS),
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(20),
        }
    }

    /// Build a config from environment variables.
    ///
    /// `INSIGHT_API_KEY` is required; `INSIGHT_BASE_URL` and
    /// `REFRESH_INTERVAL_SECONDS` fall back to defaults.
    pub fn from_env() -> Result<Self, env::VarError> {
        let api_key = env::var("INSIGHT_API_KEY")?;
        let base_url =
            env::var("INSIGHT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let interval_seconds: u64 = env::var("REFRESH_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECONDS);

        Ok(Self::new(api_key, base_url).with_refresh_interval(Duration::from_secs(interval_seconds)))
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}

/// Deployment environment name, defaulting to "sandbox".
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
