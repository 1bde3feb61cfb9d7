//! Canned-response transport for tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use super::{ApiRequest, RawResponse, Transport, TransportError};

/// Transport that replays queued responses and records every request.
///
/// Responses are consumed in FIFO order. Executing against an empty queue
/// fails as a network error, so a misconfigured test surfaces instead of
/// hanging on a default.
///
/// # Example
///
/// ```rust
/// use bioskop_client::transport::MockTransport;
/// use serde_json::json;
///
/// let mock = MockTransport::new().with_response(200, json!({"ok": true}));
/// ```
#[derive(Default)]
pub struct MockTransport {
    responses: Arc<RwLock<VecDeque<Result<RawResponse, TransportError>>>>,
    calls: Arc<RwLock<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn enqueue(&self, status: u16, body: serde_json::Value) {
        self.responses.write().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queue a response with a raw (possibly non-JSON) body.
    pub fn enqueue_raw(&self, status: u16, body: impl Into<String>) {
        self.responses.write().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.into(),
        }));
    }

    /// Queue a transport-level failure.
    pub fn enqueue_failure(&self, message: impl Into<String>) {
        self.responses
            .write()
            .unwrap()
            .push_back(Err(TransportError::Network(message.into())));
    }

    /// Builder form of [`MockTransport::enqueue`].
    pub fn with_response(self, status: u16, body: serde_json::Value) -> Self {
        self.enqueue(status, body);
        self
    }

    /// How many requests were executed.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Every executed request, in order.
    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.read().unwrap().clone()
    }

    /// The most recent executed request.
    pub fn last_call(&self) -> Option<ApiRequest> {
        self.calls.read().unwrap().last().cloned()
    }

    /// Clear queued responses and recorded calls.
    pub fn reset(&self) {
        self.responses.write().unwrap().clear();
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockTransport {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        self.calls.write().unwrap().push(request.clone());
        self.responses
            .write()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no canned response queued".into())))
    }
}
