//! Error types for the WarriorPlus client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The variants mirror the failure classification the request executor
//! relies on: only a rate-limit response is ever retried, everything
//! else is terminal for the call.

use thiserror::Error;

/// The main error type for the WarriorPlus client
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration (e.g. empty API key)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The method/path combination could not form a valid request URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network-level failure before a response was received
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-200, non-429 status; carries the unparsed body for diagnostics
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Attempt budget consumed without a successful response
    #[error("Retry limit exceeded after {attempts} attempts")]
    RetryLimitExceeded { attempts: u32 },

    /// Response body is not valid JSON or does not match the envelope shape
    #[error("Failed to decode response body ({body_len} bytes): {source}")]
    Decode {
        body_len: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(body_len: usize, source: serde_json::Error) -> Self {
        Self::Decode { body_len, source }
    }

    /// The status code carried by an `HttpStatus` error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the executor would have retried this failure.
    ///
    /// Only rate limiting (HTTP 429) is recoverable; transport errors
    /// are never retried because the client cannot assume idempotency.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpStatus { status: 429, .. })
    }
}

/// Result type alias for the WarriorPlus client
pub type Result<T> = std::result::Result<T, Error>;
