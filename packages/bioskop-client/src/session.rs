//! Client-side session state and its persistence seam.
//!
//! A [`Session`] is the pair of bearer token and user profile returned by a
//! successful login. At most one session exists at a time; it is owned
//! exclusively by a [`SessionStore`], which the auth client writes and the
//! gateway reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

use crate::error::StoreResult;

/// A logged-in identity: the bearer token plus the profile the auth service
/// returned with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token; never inspected by the client.
    pub token: String,
    /// User profile as returned by the auth service.
    pub user: serde_json::Value,
}

impl Session {
    pub fn new(token: impl Into<String>, user: serde_json::Value) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Persistence seam for the single client session.
///
/// `set` overwrites any prior session; `clear` is idempotent. Token
/// contents are opaque and never validated here.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored session, if any. No side effects.
    async fn get(&self) -> StoreResult<Option<Session>>;

    /// Persist a session, replacing any prior one.
    async fn set(&self, session: &Session) -> StoreResult<()>;

    /// Remove the stored session. Safe to call when already empty.
    async fn clear(&self) -> StoreResult<()>;

    /// The stored bearer token, if any.
    async fn token(&self) -> StoreResult<Option<String>> {
        Ok(self.get().await?.map(|s| s.token))
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self) -> StoreResult<Option<Session>> {
        Ok(self.session.read().unwrap().clone())
    }

    async fn set(&self, session: &Session) -> StoreResult<()> {
        *self.session.write().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        *self.session.write().unwrap() = None;
        Ok(())
    }
}

/// File-backed store: one JSON document at a fixed path.
///
/// The disk analogue of browser-persisted storage. A missing file reads as
/// "no session"; a file that exists but does not decode is an error rather
/// than a silent logout.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> StoreResult<Option<Session>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str(&data)?;
        Ok(Some(session))
    }

    async fn set(&self, session: &Session) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        debug!(path = %self.path.display(), "session persisted");
        Ok(())
    }

    async fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "session cleared"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
