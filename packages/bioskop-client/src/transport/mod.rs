//! One HTTP round trip, behind a trait.
//!
//! Both the auth client and the gateway build [`ApiRequest`] values and hand
//! them to a [`Transport`], so request assembly and error-body decoding have
//! a single code path. [`HttpTransport`] is the real implementation;
//! [`MockTransport`] replays canned responses for deterministic tests.

mod http;
mod mock;

pub use http::HttpTransport;
pub use mock::MockTransport;
pub use reqwest::Method;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::types::ErrorBody;

/// A single outgoing request: method, absolute URL, optional JSON body, and
/// extra headers. Transient; constructed per call and never persisted.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attach a JSON body.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, serde_json::Error> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a header only if none with that name is present.
    pub fn with_default_header(self, name: &str, value: &str) -> Self {
        if self.header(name).is_some() {
            return self;
        }
        self.with_header(name, value)
    }

    /// Set a header, dropping any existing values for it first.
    pub fn with_replaced_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.with_header(name, value)
    }

    /// First header value matching `name`, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed round trip, before interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// The service's `error` field, or `fallback` when the body has no
    /// usable message.
    pub fn error_message(&self, fallback: &str) -> String {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
}

/// Executes exactly one HTTP round trip. No retry, no backoff.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}
