//! HTTP client for collaborator lookups

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{Collaborator, UpstreamError};

/// HTTP client bound to one collaborator's base URL
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
    service: Collaborator,
}

impl ServiceClient {
    /// Create a client whose every request is bounded by `timeout`
    pub fn new(
        service: Collaborator,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            service,
        })
    }

    /// `{base}/{resource}/{id}`
    fn resource_url(&self, id: i64) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.service.resource(),
            id
        )
    }

    /// Fetch one resource by id and decode it
    pub async fn get_by_id<T: DeserializeOwned>(&self, id: i64) -> Result<T, UpstreamError> {
        let url = self.resource_url(id);
        tracing::debug!(service = %self.service, %url, "Upstream lookup");

        let result = self.fetch(&url).await;
        if let Err(e) = &result {
            tracing::warn!(
                service = %self.service,
                %url,
                kind = %e.kind,
                detail = %e.detail,
                "Upstream lookup failed"
            );
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| UpstreamError::unreachable(self.service, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::not_found(self.service, format!("status {status}")));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::unreachable(self.service, e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| UpstreamError::malformed(self.service, e.to_string()))
    }
}
