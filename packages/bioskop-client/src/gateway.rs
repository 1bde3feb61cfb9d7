//! The authenticated-request gateway.
//!
//! Reads the stored session, injects the bearer token, and interprets
//! auth-related failures: a call made with no session fails without touching
//! the network, and a 401 response clears the session. Both cases fire the
//! unauthenticated hook so embedders can send the user back to a login
//! surface.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;
use crate::transport::{ApiRequest, Transport};

const REQUEST_FALLBACK: &str = "API request failed";

/// Callback fired when a call cannot be authenticated.
pub type UnauthenticatedHook = Arc<dyn Fn() + Send + Sync>;

/// Injects auth headers into outgoing requests and interprets auth-related
/// failure responses.
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    on_unauthenticated: Option<UnauthenticatedHook>,
}

impl Gateway {
    pub fn new(transport: Arc<dyn Transport>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            transport,
            store,
            on_unauthenticated: None,
        }
    }

    /// Install a hook fired once per call that finds no usable session.
    pub fn with_unauthenticated_hook(self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.with_unauthenticated_hook_arc(Arc::new(hook))
    }

    pub(crate) fn with_unauthenticated_hook_arc(mut self, hook: UnauthenticatedHook) -> Self {
        self.on_unauthenticated = Some(hook);
        self
    }

    fn notify_unauthenticated(&self) {
        if let Some(hook) = &self.on_unauthenticated {
            hook();
        }
    }

    /// Execute one authenticated round trip and return the parsed JSON body.
    ///
    /// The stored bearer token is always attached; caller headers may
    /// override the default `Content-Type` but never `Authorization`. A 401
    /// clears the session before the error is returned.
    pub async fn request(&self, request: ApiRequest) -> ApiResult<serde_json::Value> {
        let Some(session) = self.store.get().await? else {
            warn!(url = %request.url, "authenticated call without a session");
            self.notify_unauthenticated();
            return Err(ApiError::Unauthenticated);
        };

        let request = request
            .with_default_header("Content-Type", "application/json")
            .with_replaced_header("Authorization", format!("Bearer {}", session.token));

        let response = self.transport.execute(&request).await?;

        if response.status == 401 {
            warn!(url = %request.url, "session rejected by service, clearing");
            self.store.clear().await?;
            self.notify_unauthenticated();
            return Err(ApiError::Service {
                status: response.status,
                message: response.error_message(REQUEST_FALLBACK),
            });
        }

        if !response.is_success() {
            return Err(ApiError::Service {
                status: response.status,
                message: response.error_message(REQUEST_FALLBACK),
            });
        }

        debug!(url = %request.url, status = response.status, "request succeeded");
        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{MemorySessionStore, Session};
    use crate::transport::MockTransport;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Harness {
        gateway: Gateway,
        mock: MockTransport,
        store: Arc<MemorySessionStore>,
        fired: Arc<AtomicUsize>,
    }

    fn harness() -> Harness {
        let mock = MockTransport::new();
        let store = Arc::new(MemorySessionStore::new());
        let fired = Arc::new(AtomicUsize::new(0));

        let hook_fired = Arc::clone(&fired);
        let gateway = Gateway::new(
            Arc::new(mock.clone()),
            Arc::clone(&store) as Arc<dyn SessionStore>,
        )
        .with_unauthenticated_hook(move || {
            hook_fired.fetch_add(1, Ordering::SeqCst);
        });

        Harness {
            gateway,
            mock,
            store,
            fired,
        }
    }

    async fn log_in(store: &MemorySessionStore, token: &str) {
        store
            .set(&Session::new(token, json!({"username": "alice"})))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_bearer_token_and_default_content_type_attached() {
        let h = harness();
        log_in(&h.store, "tok-123").await;
        h.mock.enqueue(200, json!({"ok": true}));

        h.gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap();

        let call = h.mock.last_call().unwrap();
        assert_eq!(call.header("Authorization"), Some("Bearer tok-123"));
        assert_eq!(call.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_missing_session_short_circuits() {
        let h = harness();

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthenticated));
        // No network call was issued and the hook fired exactly once
        assert_eq!(h.mock.call_count(), 0);
        assert_eq!(h.fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_401_clears_session_and_fires_hook_once() {
        let h = harness();
        log_in(&h.store, "stale-token").await;
        h.mock.enqueue(401, json!({"error": "token expired"}));

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/bookings"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "token expired");
        assert!(matches!(err, ApiError::Service { status: 401, .. }));
        assert!(h.store.get().await.unwrap().is_none());
        assert_eq!(h.fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_success_uses_service_message() {
        let h = harness();
        log_in(&h.store, "tok").await;
        h.mock.enqueue(404, json!({"error": "no such movie"}));

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies/99"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "no such movie");
        // Only a 401 clears the session
        assert!(h.store.get().await.unwrap().is_some());
        assert_eq!(h.fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_success_falls_back_when_body_unusable() {
        let h = harness();
        log_in(&h.store, "tok").await;
        h.mock.enqueue_raw(500, "Internal Server Error");

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API request failed");
        assert!(matches!(err, ApiError::Service { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_caller_content_type_wins_authorization_does_not() {
        let h = harness();
        log_in(&h.store, "real-token").await;
        h.mock.enqueue(200, json!({}));

        let request = ApiRequest::post("http://api.local/movies")
            .with_header("Content-Type", "text/plain")
            .with_header("Authorization", "Bearer forged");
        h.gateway.request(request).await.unwrap();

        let call = h.mock.last_call().unwrap();
        assert_eq!(call.header("Content-Type"), Some("text/plain"));
        assert_eq!(call.header("Authorization"), Some("Bearer real-token"));
        let auth_headers = call
            .headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case("authorization"))
            .count();
        assert_eq!(auth_headers, 1);
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let h = harness();
        log_in(&h.store, "tok").await;
        h.mock.enqueue(200, json!([{"id": 1, "title": "Dune"}]));

        let value = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap();

        assert_eq!(value, json!([{"id": 1, "title": "Dune"}]));
    }

    #[tokio::test]
    async fn test_non_json_success_is_malformed() {
        let h = harness();
        log_in(&h.store, "tok").await;
        h.mock.enqueue_raw(200, "<html>ok</html>");

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_network_failure_surfaces() {
        let h = harness();
        log_in(&h.store, "tok").await;
        h.mock.enqueue_failure("connection refused");

        let err = h
            .gateway
            .request(ApiRequest::get("http://api.local/movies"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        // The session survives a transport failure
        assert!(h.store.get().await.unwrap().is_some());
    }
}
