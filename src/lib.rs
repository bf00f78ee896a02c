//! # WarriorPlus client
//!
//! A minimal Rust client for the WarriorPlus affiliate-sales API.
//!
//! ## Features
//!
//! - **API key authentication**: the key rides on every request as the
//!   `apiKey` query parameter
//! - **Rate-limit retries**: HTTP 429 backs off exponentially (100 ms
//!   doubling, 10 attempts); every other failure is terminal
//! - **Typed envelopes**: responses decode into a generic envelope over
//!   a closed set of resource kinds
//! - **Optional throttle**: opt-in token bucket to space requests out
//!   before the API pushes back
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use warriorplus_client::{Client, ClientConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new(ClientConfig::new("your-api-key"))?;
//!
//!     let sales = client.sales().await?;
//!     println!("{} of {} sales", sales.data.len(), sales.total_count);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP request execution with retry and throttling
pub mod http;

/// Response envelope decoding
pub mod decode;

/// Resource record shapes (closed set)
pub mod resources;

/// Client composition layer
pub mod client;

pub use client::Client;
pub use config::{ClientConfig, RetryConfig, API_KEY_ENV, DEFAULT_BASE_URL};
pub use decode::{ApiErrors, Envelope};
pub use error::{Error, Result};
pub use http::{RawResponse, ThrottleConfig};
pub use resources::{
    Affiliate, Customer, Partner, PartnerList, Payment, PaymentList, Resource, Sale,
};
pub use types::Method;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
