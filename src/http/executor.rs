//! Request executor
//!
//! Builds authenticated requests and runs the retry loop:
//! - HTTP 200 returns immediately
//! - HTTP 429 backs off and retries, doubling the delay each time
//! - any other status or transport failure is terminal
//!
//! The executor owns the raw response until it is handed to the decoder.

use super::throttle::Throttle;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::Method;
use bytes::Bytes;
use reqwest::StatusCode;
use tracing::{debug, warn};
use url::Url;

/// A raw HTTP exchange result: status code plus unparsed body bytes
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Full response body
    pub body: Bytes,
}

/// Executes authenticated requests with rate-limit retries
pub struct Executor {
    http: reqwest::Client,
    config: ClientConfig,
    throttle: Option<Throttle>,
}

impl Executor {
    /// Create an executor from client configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let throttle = config.throttle.as_ref().map(Throttle::new);

        Ok(Self {
            http,
            config,
            throttle,
        })
    }

    /// Build the full request URL for an endpoint path.
    ///
    /// The path is appended to the base URL unmodified and the API key
    /// is added as the `apiKey` query parameter.
    pub fn build_url(&self, path: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.config.base_url, path))?;
        url.query_pairs_mut()
            .append_pair("apiKey", &self.config.api_key);
        Ok(url)
    }

    /// Send the request, retrying on rate limiting.
    ///
    /// Transport failures are never retried: the executor cannot assume
    /// the endpoint is idempotent. There is no wall-clock deadline
    /// across the loop; the attempt budget is the only bound.
    pub async fn execute(&self, method: Method, url: Url) -> Result<RawResponse> {
        let max_attempts = self.config.retry.max_attempts;
        let mut backoff = self.config.retry.initial_backoff;

        for attempt in 1..=max_attempts {
            if let Some(ref throttle) = self.throttle {
                throttle.wait().await;
            }

            let response = self.http.request(method.into(), url.clone()).send().await?;
            let status = response.status();

            if status == StatusCode::OK {
                debug!(
                    path = url.path(),
                    attempt, "request succeeded"
                );
                let body = response.bytes().await?;
                return Ok(RawResponse {
                    status: status.as_u16(),
                    body,
                });
            }

            if status == StatusCode::TOO_MANY_REQUESTS {
                warn!(
                    path = url.path(),
                    attempt,
                    max_attempts,
                    backoff_ms = backoff.as_millis() as u64,
                    "rate limited (429), backing off"
                );
                tokio::time::sleep(backoff).await;
                backoff = backoff.saturating_mul(2);
                continue;
            }

            // Terminal status; keep the unparsed body for diagnostics
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        Err(Error::RetryLimitExceeded {
            attempts: max_attempts,
        })
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("config", &self.config)
            .field("has_throttle", &self.throttle.is_some())
            .finish_non_exhaustive()
    }
}
