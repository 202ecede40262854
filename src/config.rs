//! Exporter configuration
//!
//! Credentials and transport settings are read once from the environment
//! and handed to the API client explicitly. Nothing in the client looks at
//! env vars on its own.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV: &str = "SLACKAPI_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for the Slack Web API.
    pub token: String,
    /// API base url, overridable for tests via SLACKAPI_URL.
    pub base_url: String,
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
    pub timeout: Duration,
    /// Directory for listing dumps and exported logs.
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a config from the environment. The token is required, the
    /// rest falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(format!("Environment Variable '{}' is not set", TOKEN_ENV))
            })?;

        let mut config = Self::with_token(token);

        if let Ok(url) = env::var("SLACKAPI_URL") {
            config.base_url = url;
        }
        config.http_proxy = env::var("HTTP_PROXY").ok().filter(|p| !p.is_empty());
        config.https_proxy = env::var("HTTPS_PROXY").ok().filter(|p| !p.is_empty());
        if let Ok(secs) = env::var("SLACKAPI_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("Invalid SLACKAPI_TIMEOUT_SECS: {}", secs)))?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(dir) = env::var("SLACKAPI_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Config with an explicit token and default transport settings.
    pub fn with_token<S: Into<String>>(token: S) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_proxy: None,
            https_proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_token_uses_defaults() {
        let config = Config::with_token("xoxp-test");
        assert_eq!(config.token, "xoxp-test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert!(config.http_proxy.is_none());
        assert!(config.https_proxy.is_none());
    }

    #[test]
    fn config_is_clone() {
        let config = Config::with_token("xoxp-test");
        let cloned = config.clone();
        assert_eq!(config.token, cloned.token);
        assert_eq!(config.base_url, cloned.base_url);
    }

    #[test]
    fn default_base_url_is_slack() {
        assert_eq!(DEFAULT_BASE_URL, "https://slack.com/api");
    }
}
