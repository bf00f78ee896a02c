//! Generic response envelope
//!
//! Every API endpoint wraps its records in the same top-level JSON
//! object. The envelope is a pass-through: pagination metadata and the
//! success flag are surfaced as-is, and the client never follows
//! `has_more` on its own.

use crate::error::{Error, Result};
use crate::http::RawResponse;
use crate::resources::Resource;
use serde::{Deserialize, Serialize};

/// Error pair carried by a failure envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

/// Top-level JSON object wrapping result data plus pagination and error
/// metadata. Field names are wire-exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Non-zero when the API call succeeded
    pub success: i64,
    /// Resource kind tag (e.g. "sale")
    pub object: String,
    /// Request URI echoed back by the API
    pub uri: String,
    /// Whether more pages exist upstream
    pub has_more: bool,
    /// Total record count upstream; not validated against `data`
    pub total_count: u64,
    /// Records in API order
    pub data: Vec<T>,
    /// Populated only when `success` is zero
    #[serde(default)]
    pub errors: ApiErrors,
}

impl<T> Envelope<T> {
    /// Whether the API reported success
    pub fn is_success(&self) -> bool {
        self.success != 0
    }

    /// The error pair, when the API reported a failure
    pub fn api_error(&self) -> Option<&ApiErrors> {
        if self.is_success() {
            None
        } else {
            Some(&self.errors)
        }
    }
}

/// Decode a raw response body into a typed envelope.
///
/// The resource kind is constrained to the closed set implementing
/// [`Resource`]. Decode failures are terminal; a partially populated
/// envelope is never returned.
pub fn decode<T: Resource>(raw: &RawResponse) -> Result<Envelope<T>> {
    serde_json::from_slice(&raw.body).map_err(|e| Error::decode(raw.body.len(), e))
}
