//! Session store
//!
//! Holds the identity of the signed-in user. The session is a presence flag
//! only: no token, no expiry, no refresh. It is persisted under the fixed
//! [`SESSION_KEY`] so it survives between invocations, hydrated explicitly on
//! start and cleared on logout. Views receive it as a value, never through
//! global state.

use crate::error::Result;
use crate::storage::SqliteStorage;
use serde::{Deserialize, Serialize};

/// Storage key of the persisted session record
pub const SESSION_KEY: &str = "user";

/// Identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Account email, also the scope for per-user local data
    pub email: String,
}

impl Session {
    /// Create a session for `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Persisted holder of the current [`Session`]
#[derive(Debug, Clone)]
pub struct SessionStore {
    storage: SqliteStorage,
    current: Option<Session>,
}

impl SessionStore {
    /// Hydrate the store from durable storage
    ///
    /// A record that cannot be parsed is treated as "signed out" and logged;
    /// it will be replaced by the next login.
    ///
    /// # Examples
    ///
    /// ```
    /// use contentdash::session::SessionStore;
    /// use contentdash::storage::SqliteStorage;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let storage = SqliteStorage::new_with_path(dir.path().join("s.db")).unwrap();
    /// let mut sessions = SessionStore::hydrate(storage.clone()).unwrap();
    /// assert!(sessions.current_user().is_none());
    ///
    /// sessions.login("ada@example.com").unwrap();
    /// let again = SessionStore::hydrate(storage).unwrap();
    /// assert_eq!(again.current_user().unwrap().email, "ada@example.com");
    /// ```
    pub fn hydrate(storage: SqliteStorage) -> Result<Self> {
        let current = match storage.get_json::<Session>(SESSION_KEY) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session record: {}", e);
                None
            }
        };

        if let Some(session) = &current {
            tracing::debug!(email = %session.email, "Session restored");
        }

        Ok(Self { storage, current })
    }

    /// Establish a session for `email` and persist it
    pub fn login(&mut self, email: impl Into<String>) -> Result<&Session> {
        let session = Session::new(email);
        self.storage.set_json(SESSION_KEY, &session)?;
        tracing::info!(email = %session.email, "Signed in");
        Ok(self.current.insert(session))
    }

    /// Clear the session, both in memory and on disk
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(SESSION_KEY)?;
        if let Some(session) = self.current.take() {
            tracing::info!(email = %session.email, "Signed out");
        }
        Ok(())
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Backing storage, shared with the other local stores
    pub fn storage(&self) -> &SqliteStorage {
        &self.storage
    }
}
