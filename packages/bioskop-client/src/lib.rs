//! Pure REST client for the Bioskop auth and ticketing microservices.
//!
//! Owns the persisted client session (bearer token + user profile), injects
//! the token into every ticketing call, interprets auth failures (a 401
//! clears the session and fires the unauthenticated hook), and ships the
//! locale formatters the platform uses for dates, times, and rupiah amounts.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use bioskop_client::{ApiConfig, BioskopClient, FileSessionStore};
//!
//! let store = Arc::new(FileSessionStore::new("bioskop-session.json"));
//! let client = BioskopClient::new(ApiConfig::from_env(), store)
//!     .on_unauthenticated(|| eprintln!("session gone, please log in"));
//!
//! client.auth().login("alice", "secret").await?;
//! let movies = client.tickets().movies().await?;
//! client.logout().await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;
pub mod session;
pub mod tickets;
pub mod transport;
pub mod types;

pub use auth::AuthClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, AuthError, AuthResult, StoreError, StoreResult};
pub use gateway::{Gateway, UnauthenticatedHook};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};
pub use tickets::TicketingClient;
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport};
pub use types::{Credentials, RegistrationProfile};

use std::sync::Arc;

/// Facade wiring one shared session store and transport into the auth,
/// gateway, and ticketing clients.
pub struct BioskopClient {
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
    transport: Arc<dyn Transport>,
    auth: AuthClient,
    gateway: Gateway,
    tickets: TicketingClient,
}

impl BioskopClient {
    /// Build a client over the real HTTP transport.
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> Self {
        Self::with_transport(config, store, Arc::new(HttpTransport::new()))
    }

    /// Build a client over a custom transport (tests use
    /// [`transport::MockTransport`]).
    pub fn with_transport(
        config: ApiConfig,
        store: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let auth = AuthClient::new(
            Arc::clone(&transport),
            Arc::clone(&store),
            config.auth_base.clone(),
        );
        let gateway = Gateway::new(Arc::clone(&transport), Arc::clone(&store));
        let tickets = TicketingClient::new(gateway.clone(), config.tickets_base.clone());
        Self {
            config,
            store,
            transport,
            auth,
            gateway,
            tickets,
        }
    }

    /// Install a hook fired whenever a call cannot be authenticated —
    /// the place to send the user back to a login surface.
    pub fn on_unauthenticated(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        let hook: UnauthenticatedHook = Arc::new(hook);
        self.gateway = Gateway::new(Arc::clone(&self.transport), Arc::clone(&self.store))
            .with_unauthenticated_hook_arc(hook);
        self.tickets = TicketingClient::new(self.gateway.clone(), self.config.tickets_base.clone());
        self
    }

    pub fn auth(&self) -> &AuthClient {
        &self.auth
    }

    pub fn tickets(&self) -> &TicketingClient {
        &self.tickets
    }

    /// The underlying gateway, for endpoints without a named wrapper.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// The current session, if one is stored.
    pub async fn session(&self) -> StoreResult<Option<Session>> {
        self.store.get().await
    }

    /// Drop the stored session. Idempotent.
    pub async fn logout(&self) -> StoreResult<()> {
        self.store.clear().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    fn wired() -> (BioskopClient, MockTransport, Arc<MemorySessionStore>) {
        let mock = MockTransport::new();
        let store = Arc::new(MemorySessionStore::new());
        let config = ApiConfig::new()
            .with_auth_base("http://auth.local/api")
            .with_tickets_base("http://tickets.local/api");
        let client = BioskopClient::with_transport(
            config,
            Arc::clone(&store) as Arc<dyn SessionStore>,
            Arc::new(mock.clone()),
        );
        (client, mock, store)
    }

    #[tokio::test]
    async fn test_login_then_authenticated_call() {
        let (client, mock, _store) = wired();
        mock.enqueue(200, json!({"token": "tok-9", "user": {"username": "alice"}}));
        mock.enqueue(200, json!([{"id": 1}]));

        client.auth().login("alice", "secret").await.unwrap();
        client.tickets().movies().await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].url, "http://auth.local/api/login");
        assert_eq!(calls[1].url, "http://tickets.local/api/movies");
        assert_eq!(calls[1].header("Authorization"), Some("Bearer tok-9"));
    }

    #[tokio::test]
    async fn test_logout_then_call_is_unauthenticated() {
        let (client, mock, store) = wired();
        store
            .set(&Session::new("tok", json!({})))
            .await
            .unwrap();

        client.logout().await.unwrap();
        assert!(client.session().await.unwrap().is_none());

        let err = client.tickets().movies().await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_hook_survives_rewiring() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mock = MockTransport::new();
        let store = Arc::new(MemorySessionStore::new());
        let fired = Arc::new(AtomicUsize::new(0));
        let hook_fired = Arc::clone(&fired);

        let client = BioskopClient::with_transport(
            ApiConfig::new().with_tickets_base("http://tickets.local/api"),
            store,
            Arc::new(mock.clone()),
        )
        .on_unauthenticated(move || {
            hook_fired.fetch_add(1, Ordering::SeqCst);
        });

        let _ = client.tickets().movies().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(mock.call_count(), 0);
    }
}
