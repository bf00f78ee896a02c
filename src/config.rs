//! Client configuration
//!
//! Immutable configuration built once at startup. The API key is the
//! only required field; everything else defaults to values matching the
//! live API. Environment lookup lives in [`ClientConfig::from_env`] so
//! the core stays agnostic to where the key came from.

use crate::error::{Error, Result};
use crate::http::ThrottleConfig;
use std::time::Duration;

/// Base URL of the versioned WarriorPlus REST API
pub const DEFAULT_BASE_URL: &str = "https://warriorplus.com/api/v2";

/// Environment variable the binary reads the API key from
pub const API_KEY_ENV: &str = "WARRIORPLUS_API_KEY";

/// Retry policy applied by the request executor.
///
/// Only HTTP 429 triggers a retry; the backoff doubles after every
/// rate-limit response and is uncapped within the attempt budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts including the initial request
    pub max_attempts: u32,
    /// Backoff before the first retry; doubles after every 429
    pub initial_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            initial_backoff: Duration::from_millis(100),
        }
    }
}

/// Configuration for the WarriorPlus client
#[derive(Clone)]
pub struct ClientConfig {
    /// API key appended to every request as the `apiKey` query parameter
    pub api_key: String,
    /// Base URL for all requests
    pub base_url: String,
    /// Per-attempt transport timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Retry policy for rate-limit responses
    pub retry: RetryConfig,
    /// Optional client-side throttle applied before each attempt
    pub throttle: Option<ThrottleConfig>,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("warriorplus-client/{}", env!("CARGO_PKG_VERSION")),
            retry: RetryConfig::default(),
            throttle: None,
        }
    }

    /// Read the API key from [`API_KEY_ENV`].
    ///
    /// Entry-point helper; library callers construct the config
    /// explicitly instead.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{API_KEY_ENV} is not set")))?;
        Ok(Self::new(api_key))
    }

    /// Create a new config builder
    pub fn builder(api_key: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(api_key),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("retry", &self.retry)
            .field("throttle", &self.throttle)
            .finish()
    }
}

/// Builder for client config
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Override the base URL (tests point this at a mock server)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the per-attempt transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn retry(mut self, max_attempts: u32, initial_backoff: Duration) -> Self {
        self.config.retry = RetryConfig {
            max_attempts,
            initial_backoff,
        };
        self
    }

    /// Enable a client-side throttle
    pub fn throttle(mut self, throttle: ThrottleConfig) -> Self {
        self.config.throttle = Some(throttle);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
