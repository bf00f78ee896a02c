//! Response envelope decoding
//!
//! Deserializes a raw response body into the generic [`Envelope`]
//! parameterized by resource kind. No retry happens at this layer.

mod envelope;

pub use envelope::{decode, ApiErrors, Envelope};
