//! # Filesystem-backed key/value store
//!
//! [`FileStore`] persists each key as a small file so a session survives app
//! restarts on native targets (tests, desktop builds).
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token      # raw bearer token
//! └── user       # JSON user descriptor
//! ```
//!
//! Callers usually pass `dirs::data_dir().join("smart-contacts")` as the base.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write key {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, Session, SessionUser};
    use crate::session::SessionStore;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("smart_contacts_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let session = Session::new(
            "file-token",
            SessionUser {
                user_id: 3,
                name: "Bo".to_string(),
                email: "bo@example.com".to_string(),
                role: Role::Admin,
                image_path: Some("uploads/bo.png".to_string()),
            },
        );
        SessionStore::new(FileStore::new(dir.clone())).save(&session);

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.load(), Some(session));

        reopened.clear();
        assert!(SessionStore::new(FileStore::new(dir.clone())).load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_reads_as_empty() {
        let store = FileStore::new(std::env::temp_dir().join("smart_contacts_does_not_exist"));
        assert!(store.get("token").is_none());
        store.remove("token");
    }
}
