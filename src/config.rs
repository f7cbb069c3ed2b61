//! Configuration parsed from environment variables.

use std::str::FromStr;
use std::time::Duration;

use crate::display::USERINFO_COOKIE;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown PROFILE_VIEW_SOURCE: {0} (expected 'remote' or 'cookie')")]
    UnknownSource(String),
    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

/// Where page load gets the logged-in user from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileSource {
    /// `GET /github/profile` on the server.
    #[default]
    Remote,
    /// The client-readable `userinfo` cookie.
    Cookie,
}

impl FromStr for ProfileSource {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "cookie" => Ok(Self::Cookie),
            _ => Err(ConfigError::UnknownSource(raw.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request: Duration,
    pub connect: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub cookie_name: String,
    pub source: ProfileSource,
    pub timeouts: Timeouts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            cookie_name: USERINFO_COOKIE.to_owned(),
            source: ProfileSource::default(),
            timeouts: Timeouts::default(),
        }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PROFILE_VIEW_BASE_URL`: server origin, default `http://localhost:8080`
    /// - `PROFILE_VIEW_COOKIE_NAME`: default `userinfo`
    /// - `PROFILE_VIEW_SOURCE`: `remote` (default) or `cookie`
    /// - `PROFILE_VIEW_REQUEST_TIMEOUT_SECS`: default 10
    /// - `PROFILE_VIEW_CONNECT_TIMEOUT_SECS`: default 5
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("PROFILE_VIEW_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let cookie_name = std::env::var("PROFILE_VIEW_COOKIE_NAME")
            .map(|name| name.trim().to_owned())
            .unwrap_or_default();
        let cookie_name = if cookie_name.is_empty() { USERINFO_COOKIE.to_owned() } else { cookie_name };
        let source = match std::env::var("PROFILE_VIEW_SOURCE") {
            Ok(raw) => raw.parse()?,
            Err(_) => ProfileSource::default(),
        };
        let timeouts = Timeouts {
            request: env_secs("PROFILE_VIEW_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect: env_secs("PROFILE_VIEW_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { base_url, cookie_name, source, timeouts })
    }
}

fn env_secs(var: &'static str, default: u64) -> Result<Duration, ConfigError> {
    let Ok(raw) = std::env::var(var) else {
        return Ok(Duration::from_secs(default));
    };
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
