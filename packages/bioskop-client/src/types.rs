//! Wire types for the auth and ticketing services.
//!
//! Inputs derive `Serialize` only, outputs `Deserialize` only; field names
//! are exactly what the services expect on the wire. Movie and booking
//! payloads are owned by the ticketing service and stay `serde_json::Value`
//! on this side.

use serde::{Deserialize, Serialize};

/// Login request body for `POST {auth_base}/login`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request body for `POST {auth_base}/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationProfile {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

impl RegistrationProfile {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            full_name: full_name.into(),
            phone: phone.into(),
            password: password.into(),
        }
    }
}

/// Successful login response from the auth service.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: serde_json::Value,
}

/// Error body shape shared by both services on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
}
