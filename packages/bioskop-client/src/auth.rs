//! Login and registration against the auth service.

use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{AuthError, AuthResult};
use crate::session::{Session, SessionStore};
use crate::transport::{ApiRequest, Transport};
use crate::types::{Credentials, LoginResponse, RegistrationProfile};

const LOGIN_FALLBACK: &str = "Login failed";
const REGISTER_FALLBACK: &str = "Registration failed";

/// Client for the auth service's login and registration endpoints.
///
/// Each operation is a single round trip with no retry; a rejection carries
/// the service's own message. Only a successful login mutates the session
/// store.
pub struct AuthClient {
    transport: Arc<dyn Transport>,
    store: Arc<dyn SessionStore>,
    base_url: String,
}

impl AuthClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn SessionStore>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            store,
            base_url: base_url.into(),
        }
    }

    /// Log in and persist the returned session.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Session> {
        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(format!("{}/login", self.base_url))
            .with_header("Content-Type", "application/json")
            .with_json(&credentials)?;

        let response = self.transport.execute(&request).await?;
        if !response.is_success() {
            warn!(username, status = response.status, "login rejected");
            return Err(AuthError::Rejected(response.error_message(LOGIN_FALLBACK)));
        }

        let login: LoginResponse = serde_json::from_str(&response.body)?;
        let session = Session::new(login.token, login.user);
        self.store.set(&session).await?;
        info!(username, "login succeeded");
        Ok(session)
    }

    /// Register a new account.
    ///
    /// Registration does not imply login: the session store is never touched,
    /// whatever the outcome. Returns the service's confirmation JSON.
    pub async fn register(&self, profile: &RegistrationProfile) -> AuthResult<serde_json::Value> {
        let request = ApiRequest::post(format!("{}/register", self.base_url))
            .with_header("Content-Type", "application/json")
            .with_json(profile)?;

        let response = self.transport.execute(&request).await?;
        if !response.is_success() {
            warn!(username = %profile.username, status = response.status, "registration rejected");
            return Err(AuthError::Rejected(
                response.error_message(REGISTER_FALLBACK),
            ));
        }

        info!(username = %profile.username, "registration accepted");
        Ok(response.json()?)
    }
}
