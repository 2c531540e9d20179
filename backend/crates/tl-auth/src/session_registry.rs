use crate::SessionToken;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info};

/// In-memory map from session token to username.
///
/// Clones share one map. Sessions live until revoked or the process exits;
/// nothing is persisted and nothing expires.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<HashMap<SessionToken, String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `username`. A user may hold any number of sessions.
    pub fn issue(&self, username: &str) -> SessionToken {
        let token = SessionToken::generate();

        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        sessions.insert(token.clone(), username.to_string());
        info!("Session issued for {username} ({} active)", sessions.len());

        token
    }

    pub fn resolve(&self, token: &SessionToken) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
    }

    /// End a session. Unknown tokens are ignored.
    pub fn revoke(&self, token: &SessionToken) {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(username) = sessions.remove(token) {
            info!("Session revoked for {username} ({} active)", sessions.len());
        } else {
            debug!("Revoke of unknown session ignored");
        }
    }

    /// End every session held under `username`. Returns how many were removed.
    pub fn revoke_user(&self, username: &str) -> usize {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, owner| owner != username);
        let removed = before - sessions.len();
        if removed > 0 {
            info!("Revoked {removed} session(s) for {username} ({} active)", sessions.len());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
