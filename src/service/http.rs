use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::ServiceConfig;
use crate::entity::ListItem;

use super::{ListService, ServiceError};

/// Fetches items from the configured JSON endpoint.
pub struct HttpListService {
    client: Client,
    /// `None` when the configured endpoint did not parse; every fetch then
    /// fails with [`ServiceError::InvalidUrl`].
    url: Option<Url>,
    request_timeout: Duration,
}

impl HttpListService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ServiceError::network)?;

        Ok(Self::with_client(client, config))
    }

    /// Build on top of an existing client (shared connection pool).
    pub fn with_client(client: Client, config: &ServiceConfig) -> Self {
        let endpoint = config.endpoint();
        let url = Url::parse(&endpoint)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"));
        if url.is_none() {
            tracing::warn!(endpoint = %endpoint, "list endpoint is not a valid http(s) URL");
        }

        Self {
            client,
            url,
            request_timeout: config.request_timeout(),
        }
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    async fn do_fetch(&self, url: Url) -> Result<Vec<ListItem>, ServiceError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(ServiceError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(ServiceError::network)?;
        if body.is_empty() {
            return Err(ServiceError::NoData);
        }

        let items: Vec<ListItem> = serde_json::from_slice(&body)?;
        Ok(items)
    }
}

#[async_trait]
impl ListService for HttpListService {
    async fn fetch_items(&self) -> Result<Vec<ListItem>, ServiceError> {
        let url = self.url.clone().ok_or(ServiceError::InvalidUrl)?;
        tracing::debug!(url = %url, "fetching list items");

        match timeout(self.request_timeout, self.do_fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(ServiceError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}
