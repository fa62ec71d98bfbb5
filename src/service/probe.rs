//! Connectivity priming.
//!
//! Some platforms only ask the user for network access on the first
//! outgoing request. A probe sends one cheap request up front so that
//! prompt appears before the list is loaded. It is passed explicitly to
//! whoever needs it; there is no global instance.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ProbeConfig;

use super::ServiceError;

#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Send the priming request. Returns whether any response arrived.
    /// Failures are never fatal.
    async fn probe(&self) -> bool;
}

/// Sends a single HEAD request and discards the response.
pub struct HttpProbe {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpProbe {
    pub fn new(config: &ProbeConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ServiceError::network)?;

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout: config.timeout(),
        })
    }
}

#[async_trait]
impl ConnectivityProbe for HttpProbe {
    async fn probe(&self) -> bool {
        match self.client.head(&self.url).send().await {
            Ok(response) => {
                tracing::debug!(url = %self.url, status = %response.status(), "connectivity probe answered");
                true
            }
            Err(err) => {
                tracing::debug!(
                    url = %self.url,
                    timeout_secs = self.timeout.as_secs(),
                    error = %err,
                    "connectivity probe failed"
                );
                false
            }
        }
    }
}
