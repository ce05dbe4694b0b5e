//! Application-wide configuration constants and the optional TOML override file.

use crate::prelude::*;
use serde::Deserialize;

pub const NAME: &str = "Catboy";
/// Endpoint returning a JSON object with a random image `url`.
pub const METADATA_URL: &str = "https://api.catboys.com/img";
/// Largest window width.
pub const MAX_WIDTH: u32 = 800;
/// Largest window height.
pub const MAX_HEIGHT: u32 = 600;
pub const USER_AGENT: &str = "libcurl-agent/1.0";
/// Metadata requests before giving up.
pub const MAX_ATTEMPTS: u32 = 10;
/// Delay before the first retry; doubles on each further retry.
pub const RETRY_DELAY_MS: u64 = 250;
pub const MAX_RETRY_DELAY_MS: u64 = 4000;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime settings. Every field falls back to the constant above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub endpoint: String,
    pub title: String,
    pub max_width: u32,
    pub max_height: u32,
    pub user_agent: String,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
    pub timeout_secs: u64,
    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub no_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: METADATA_URL.to_string(),
            title: NAME.to_string(),
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
            user_agent: USER_AGENT.to_string(),
            max_attempts: MAX_ATTEMPTS,
            retry_delay_ms: RETRY_DELAY_MS,
            max_retry_delay_ms: MAX_RETRY_DELAY_MS,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            no_proxy: false,
        }
    }
}

impl Config {
    /// Load the config file at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                debug!("Reading config from {}", path.display());
                let contents = fs::read_to_string(path)?;
                Self::from_toml_str(&contents)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| AppError::Config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.endpoint.trim().is_empty() {
            return Err(AppError::Config("endpoint must not be empty".to_string()));
        }
        if self.max_width == 0 || self.max_height == 0 {
            return Err(AppError::Config(format!(
                "window bounds must be positive, got {}x{}",
                self.max_width, self.max_height
            )));
        }
        if self.max_attempts == 0 {
            return Err(AppError::Config("max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            initial_delay: Duration::from_millis(self.retry_delay_ms),
            max_delay: Duration::from_millis(self.max_retry_delay_ms),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        // 0 disables the timeout
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
