//! # Session store: token + user persistence over a key/value backend
//!
//! [`SessionStore`] is the only writer and reader of the client's authentication
//! artifacts. It sits on top of a [`KeyValueStore`], so the same logic runs
//! against browser `localStorage` ([`crate::LocalStorageStore`]), a directory
//! of small files on native targets ([`crate::FileStore`]) or an in-memory map
//! in tests ([`crate::MemoryStore`]).
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | raw bearer token |
//! | [`USER_KEY`] (`"user"`) | JSON [`SessionUser`] |
//!
//! ## Pairing
//!
//! [`save`](SessionStore::save) writes the user blob first and the token last;
//! [`clear`](SessionStore::clear) removes the token first. [`load`](SessionStore::load)
//! only returns a [`Session`] when both keys are present and the user blob
//! parses, so a partially written or partially cleared pair reads as "no session".

use std::rc::Rc;

use crate::models::{Session, SessionUser};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value persistence used by [`SessionStore`].
///
/// Implementations swallow their own I/O failures: reads degrade to `None`,
/// writes become no-ops.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Shared handle to the persisted session.
///
/// Cheap to clone; every clone reads and writes the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Return the current session, or `None` if never saved or cleared.
    pub fn load(&self) -> Option<Session> {
        let token = self.backend.get(TOKEN_KEY)?;
        if token.is_empty() {
            return None;
        }
        let raw = self.backend.get(USER_KEY)?;
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!("Discarding unreadable session user: {}", e);
                None
            }
        }
    }

    /// Persist both halves of a session.
    pub fn save(&self, session: &Session) {
        let user = match serde_json::to_string(&session.user) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Failed to serialize session user: {}", e);
                return;
            }
        };
        self.backend.set(USER_KEY, &user);
        self.backend.set(TOKEN_KEY, &session.token);
    }

    /// Remove both halves of the session.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// Just the bearer token, if a session is present.
    pub fn token(&self) -> Option<String> {
        self.load().map(|s| s.token)
    }

    /// Rewrite the stored user blob. Does nothing without a session.
    pub fn update_user(&self, f: impl FnOnce(&mut SessionUser)) -> Option<Session> {
        let mut session = self.load()?;
        f(&mut session.user);
        self.save(&session);
        Some(session)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.load().is_some())
            .finish()
    }
}
