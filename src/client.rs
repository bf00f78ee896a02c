//! Client composition layer
//!
//! Orchestrates build → execute → decode. Errors short-circuit and are
//! propagated to the caller unchanged; callers see either a terminal
//! error or a fully decoded envelope, never a partial one.

use crate::config::ClientConfig;
use crate::decode::{self, Envelope};
use crate::error::{Error, Result};
use crate::http::Executor;
use crate::resources::{Affiliate, Customer, Partner, Payment, Resource, Sale};
use crate::types::Method;

/// Client for the WarriorPlus affiliate-sales API
#[derive(Debug)]
pub struct Client {
    executor: Executor,
}

impl Client {
    /// Create a client from configuration.
    ///
    /// Fails with a configuration error if the API key is empty; where
    /// the key came from is the caller's concern.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }

        Ok(Self {
            executor: Executor::new(config)?,
        })
    }

    /// Perform a request and decode the envelope for a resource kind
    pub async fn request<T: Resource>(&self, method: Method, path: &str) -> Result<Envelope<T>> {
        let url = self.executor.build_url(path)?;
        let raw = self.executor.execute(method, url).await?;
        decode::decode(&raw)
    }

    /// List sales
    pub async fn sales(&self) -> Result<Envelope<Sale>> {
        self.request(Method::GET, "/sales").await
    }

    /// List partners
    pub async fn partners(&self) -> Result<Envelope<Partner>> {
        self.request(Method::GET, "/partners").await
    }

    /// List payments
    pub async fn payments(&self) -> Result<Envelope<Payment>> {
        self.request(Method::GET, "/payments").await
    }

    /// List affiliates
    pub async fn affiliates(&self) -> Result<Envelope<Affiliate>> {
        self.request(Method::GET, "/affiliates").await
    }

    /// List customers
    pub async fn customers(&self) -> Result<Envelope<Customer>> {
        self.request(Method::GET, "/customers").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_empty_api_key() {
        let result = Client::new(ClientConfig::new(""));
        assert!(matches!(result, Err(Error::Config { .. })));

        let result = Client::new(ClientConfig::new("   "));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_client_accepts_non_empty_api_key() {
        assert!(Client::new(ClientConfig::new("wp-key")).is_ok());
    }
}
