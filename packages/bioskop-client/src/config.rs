//! Service endpoints.

use std::env;

/// Production auth service base URL.
pub const DEFAULT_AUTH_BASE: &str = "https://microservice-auth-movie.vercel.app/api";

/// Production ticketing service base URL.
pub const DEFAULT_TICKETS_BASE: &str = "https://microservice-crud-movie.vercel.app/api";

/// Base URLs for the two backing services.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub auth_base: String,
    pub tickets_base: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_base: DEFAULT_AUTH_BASE.to_string(),
            tickets_base: DEFAULT_TICKETS_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    /// The production endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Production defaults, overridden by `BIOSKOP_AUTH_URL` and
    /// `BIOSKOP_TICKETS_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("BIOSKOP_AUTH_URL") {
            config.auth_base = url;
        }
        if let Ok(url) = env::var("BIOSKOP_TICKETS_URL") {
            config.tickets_base = url;
        }
        config
    }

    /// Override the auth service base URL.
    pub fn with_auth_base(mut self, url: impl Into<String>) -> Self {
        self.auth_base = url.into();
        self
    }

    /// Override the ticketing service base URL.
    pub fn with_tickets_base(mut self, url: impl Into<String>) -> Self {
        self.tickets_base = url.into();
        self
    }
}
