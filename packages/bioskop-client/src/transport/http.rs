//! reqwest-backed transport.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{ApiRequest, RawResponse, Transport, TransportError};

/// Real transport over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Use a pre-configured `reqwest::Client` (custom timeouts, proxies).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = self.client.request(request.method.clone(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            TransportError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        debug!(status, url = %request.url, "response received");
        Ok(RawResponse { status, body })
    }
}
