//! # Browser `localStorage` backend
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Keys are written verbatim (`token`, `user`) so the persisted layout matches
//! what the server-side tooling and older builds of the client expect.
//!
//! The `Storage` handle is looked up on every call: `web_sys::Storage` is not
//! `Clone`, and the lookup is a cheap property read. When storage is
//! unavailable (private browsing, disabled cookies) reads return `None` and
//! writes are dropped with a warning.

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {}", key);
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write to {}", key);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping removal of {}", key);
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("localStorage rejected removal of {}", key);
        }
    }
}
