use std::env;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use crate::ui::DecorationRules;

// Default configuration constants
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 4000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 0;
pub const DEFAULT_HALT_HIDDEN_STATES: &str = "halted,halting";
pub const DEFAULT_STRUCK_STATES: &str = "halted,halting,failed";

/// Invalid values supplied on the command line
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Poll interval must be greater than zero")]
    ZeroInterval,
    #[error("Base URL must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
}

/// Runtime settings shared by every loop in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub poll_interval: Duration,
    /// `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    pub decoration: DecorationRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: None,
            decoration: DecorationRules::default(),
        }
    }
}

impl Config {
    /// Build a config from `SYME_*` environment variables, falling back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            base_url: get_base_url(),
            poll_interval: get_poll_interval(),
            request_timeout: get_request_timeout(),
            decoration: DecorationRules::new(
                parse_state_list(&env::var("SYME_HALT_HIDDEN_STATES").unwrap_or_else(|_| DEFAULT_HALT_HIDDEN_STATES.to_string())),
                parse_state_list(&env::var("SYME_STRUCK_STATES").unwrap_or_else(|_| DEFAULT_STRUCK_STATES.to_string())),
            ),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, base_url: Option<&str>, interval_ms: Option<u64>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url {
            let url = sanitize_base_url(url);
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidBaseUrl(url));
            }
            self.base_url = url;
        }
        match interval_ms {
            Some(0) => return Err(ConfigError::ZeroInterval),
            Some(ms) => self.poll_interval = Duration::from_millis(ms),
            None => {}
        }
        Ok(self)
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(path, error = %e, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_base_url() -> String {
    sanitize_base_url(&env::var("SYME_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
}

pub fn get_poll_interval() -> Duration {
    let raw = env::var("SYME_POLL_INTERVAL_MS").unwrap_or_default();
    Duration::from_millis(parse_millis(&raw, DEFAULT_POLL_INTERVAL_MS, "SYME_POLL_INTERVAL_MS"))
}

pub fn get_request_timeout() -> Option<Duration> {
    let raw = env::var("SYME_REQUEST_TIMEOUT_MS").unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_MS.to_string());
    if raw.trim().is_empty() {
        return None;
    }
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "Ignoring invalid SYME_REQUEST_TIMEOUT_MS");
            None
        }
    }
}

/// Parse a positive millisecond count. Empty, zero and garbage all yield `default`.
pub fn parse_millis(raw: &str, default: u64, var: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse::<u64>() {
        Ok(0) => {
            tracing::warn!(var, "Interval of 0 ms would busy-poll; using default");
            default
        }
        Ok(ms) => ms,
        Err(e) => {
            tracing::warn!(var, value = %trimmed, error = %e, "Ignoring invalid interval");
            default
        }
    }
}

pub fn parse_state_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
