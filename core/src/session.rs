//! Session lookup seam and an in-memory session store.
//!
//! # Design
//! The identity provider owns token issuance and expiry. The client only
//! needs "what is the current access token, if any" and "sign out", so that
//! is all `SessionProvider` exposes.

use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

/// An authenticated session. The token is opaque to this crate.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: SessionUser) -> Self {
        self.user = Some(user);
        self
    }
}

// Keep bearer tokens out of debug logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Source of the current session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// The session in effect right now, or `None` when signed out.
    ///
    /// A failed lookup is reported as `None`.
    async fn get_session(&self) -> Option<Session>;

    /// Invalidate the current session.
    async fn sign_out(&self);
}

/// `SessionProvider` holding at most one session in memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    current: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            current: RwLock::new(Some(session)),
        }
    }

    /// Replace the current session.
    pub fn sign_in(&self, session: Session) {
        let mut slot = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(session);
    }
}

#[async_trait]
impl SessionProvider for MemorySessionStore {
    async fn get_session(&self) -> Option<Session> {
        self.current.read().ok()?.clone()
    }

    async fn sign_out(&self) {
        let mut slot = self.current.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.take().is_some() {
            tracing::info!("signed out");
        }
    }
}
