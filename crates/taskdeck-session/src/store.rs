// SPDX-FileCopyrightText: 2026 Taskdeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-backed session store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use taskdeck_core::{SessionSink, TaskdeckError, UserProfile};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionData {
    token: String,
    user: UserProfile,
}

/// Session persisted as one JSON file holding the token and user profile.
///
/// The file is read once at construction; every mutation rewrites it
/// wholesale and updates the in-memory copy. Implements [`SessionSink`] so
/// a 401 from any API call clears the stored credentials.
pub struct FileSessionStore {
    path: PathBuf,
    state: Mutex<Option<SessionData>>,
}

impl FileSessionStore {
    /// Opens the store, loading any existing session. An unreadable or
    /// corrupt file degrades to no session.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let state = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SessionData>(&raw) {
                Ok(data) => Some(data),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "session file corrupt, ignoring");
                    None
                }
            },
            Err(_) => None,
        };
        Self {
            path,
            state: Mutex::new(state),
        }
    }

    /// Persists a fresh session from a login or signup response.
    pub fn save(&self, profile: &UserProfile) -> Result<(), TaskdeckError> {
        let data = SessionData {
            token: profile.token.clone(),
            user: profile.clone(),
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| TaskdeckError::Storage {
                message: format!("could not create {}", parent.display()),
                source: Some(Box::new(err)),
            })?;
        }
        let raw = serde_json::to_string_pretty(&data).map_err(|err| TaskdeckError::Storage {
            message: "could not serialize session".into(),
            source: Some(Box::new(err)),
        })?;
        fs::write(&self.path, raw).map_err(|err| TaskdeckError::Storage {
            message: format!("could not write {}", self.path.display()),
            source: Some(Box::new(err)),
        })?;
        if let Ok(mut state) = self.state.lock() {
            *state = Some(data);
        }
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Removes the session file and forgets the in-memory copy.
    pub fn clear(&self) -> Result<(), TaskdeckError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(TaskdeckError::Storage {
                    message: format!("could not remove {}", self.path.display()),
                    source: Some(Box::new(err)),
                });
            }
        }
        if let Ok(mut state) = self.state.lock() {
            *state = None;
        }
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.as_ref().map(|data| data.token.clone()))
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state
            .lock()
            .ok()
            .and_then(|state| state.as_ref().map(|data| data.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|user| user.is_admin())
    }
}

impl SessionSink for FileSessionStore {
    fn invalidate_session(&self) {
        if let Err(err) = self.clear() {
            warn!(error = %err, "could not clear session after 401");
        } else {
            debug!("session invalidated after 401");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile {
            token: "tok-123".into(),
            username: "alice".into(),
            email: Some("alice@example.com".into()),
            role: "USER".into(),
        }
    }

    #[test]
    fn save_then_reopen_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        assert!(!store.is_authenticated());
        store.save(&profile()).unwrap();

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("tok-123"));
        assert_eq!(reopened.user().unwrap().username, "alice");
        assert!(reopened.is_authenticated());
        assert!(!reopened.is_admin());
    }

    #[test]
    fn clear_removes_file_and_memory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path);
        store.save(&profile()).unwrap();

        store.clear().unwrap();
        assert!(!store.is_authenticated());
        assert!(!path.exists());

        // Clearing an already-absent file is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_degrades_to_no_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn sink_invalidation_clears_credentials() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path);
        store.save(&profile()).unwrap();

        store.invalidate_session();
        assert!(!store.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn admin_flag_follows_role() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::open(dir.path().join("session.json"));
        let mut admin = profile();
        admin.role = "ADMIN".into();
        store.save(&admin).unwrap();
        assert!(store.is_admin());
    }
}
