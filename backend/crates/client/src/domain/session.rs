//! Session context
//!
//! The single read/write/clear API over the `token` and `user` entries of
//! client-local storage. Every call reads the token through here and a 401
//! clears both entries through here.

use std::sync::Arc;

use crate::domain::entity::UserProfile;
use crate::domain::storage::KeyValueStorage;
use crate::error::{ClientError, ClientResult};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Snapshot of what the storage currently holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Access to the session of the current host
///
/// `browser` contexts own a storage. `detached` contexts (server-side
/// rendering, background jobs) have none: they never attach a token and a
/// 401 is reported as an ordinary backend failure.
#[derive(Clone)]
pub struct SessionContext {
    storage: Option<Arc<dyn KeyValueStorage>>,
}

impl SessionContext {
    pub fn browser(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn is_attached(&self) -> bool {
        self.storage.is_some()
    }

    fn storage(&self) -> ClientResult<&Arc<dyn KeyValueStorage>> {
        self.storage
            .as_ref()
            .ok_or_else(|| ClientError::Storage("no session storage in this context".to_string()))
    }

    /// Stored bearer token; empty values count as absent
    pub fn token(&self) -> ClientResult<Option<String>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        Ok(storage.get(TOKEN_KEY)?.filter(|t| !t.is_empty()))
    }

    /// Stored profile. An entry that no longer parses is treated as absent.
    pub fn user(&self) -> ClientResult<Option<UserProfile>> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        let Some(raw) = storage.get(USER_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Stored user entry is not a valid profile");
                Ok(None)
            }
        }
    }

    pub fn session(&self) -> ClientResult<Session> {
        Ok(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn is_authenticated(&self) -> ClientResult<bool> {
        Ok(self.token()?.is_some())
    }

    pub fn store_token(&self, token: &str) -> ClientResult<()> {
        self.storage()?.set(TOKEN_KEY, token)
    }

    pub fn store_user(&self, user: &UserProfile) -> ClientResult<()> {
        let raw = serde_json::to_string(user).map_err(|e| ClientError::Storage(e.to_string()))?;
        self.storage()?.set(USER_KEY, &raw)
    }

    /// Token and profile together, as after a login
    pub fn start(&self, token: &str, user: Option<&UserProfile>) -> ClientResult<()> {
        self.store_token(token)?;
        if let Some(user) = user {
            self.store_user(user)?;
        }
        Ok(())
    }

    /// Remove both entries. A detached context has nothing to clear.
    pub fn clear(&self) -> ClientResult<()> {
        if let Some(storage) = &self.storage {
            storage.remove(TOKEN_KEY)?;
            storage.remove(USER_KEY)?;
        }
        Ok(())
    }

    pub fn has_role(&self, role: &str) -> ClientResult<bool> {
        Ok(self.user()?.is_some_and(|u| u.has_role(role)))
    }

    pub fn is_admin(&self) -> ClientResult<bool> {
        Ok(self.user()?.is_some_and(|u| u.is_admin()))
    }

    /// Customer the signed-in user acts for
    pub fn customer_id(&self) -> ClientResult<Option<i64>> {
        Ok(self.user()?.and_then(|u| u.customer_id()))
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("attached", &self.is_attached())
            .finish()
    }
}
