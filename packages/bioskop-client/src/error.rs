//! Typed errors for the client.
//!
//! One `thiserror` enum per failure domain (auth, gateway, session
//! persistence), with `Result` aliases at the bottom. Library errors stay
//! strongly typed rather than collapsing into `anyhow`.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors from login and registration.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth service rejected the operation. Carries the service's own
    /// message, or the operation's fixed fallback when the body had none.
    #[error("{0}")]
    Rejected(String),

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// Persisting or reading the session failed.
    #[error("session storage error: {0}")]
    Storage(#[from] StoreError),

    /// A success response did not decode as expected.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors from authenticated gateway calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session is stored; the call was never sent.
    #[error("not authenticated")]
    Unauthenticated,

    /// The service answered with a non-success status. The message is the
    /// service's `error` field when present.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Network(#[from] TransportError),

    /// Persisting or reading the session failed.
    #[error("session storage error: {0}")]
    Storage(#[from] StoreError),

    /// A success response did not decode as JSON.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Errors from session persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted session exists but does not decode.
    #[error("session JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for auth operations.
pub type AuthResult<T> = std::result::Result<T, AuthError>;

/// Result type alias for gateway and resource operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Result type alias for session store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
