//! Persisted admin session: token plus profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads as two `localStorage` entries, `admin_token`
//! (raw token) and `admin_info` (JSON profile). Only the root controller
//! reads or writes them; views receive the session through `ApiContext`.
//!
//! ERROR HANDLING
//! ==============
//! Malformed persisted data is "no session", never an error: `load` clears
//! the corrupt entries and returns `None`. Write failures surface as
//! [`StorageError`] so the login screen can report them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "admin_token";
pub const PROFILE_KEY: &str = "admin_info";

/// Failure writing session state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("failed to write session: {0}")]
    Write(String),
}

/// Key/value persistence backend.
pub trait KeyValueStorage {
    /// Read `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Missing keys and unreachable backends are ignored.
    fn remove(&self, key: &str);
}

/// Signed-in admin shown in the header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub admin_id: Option<u64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Profile {
    /// Header name, `Admin` when unknown.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() { "Admin" } else { name }
    }

    /// Uppercase first letter of the display name for the avatar.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map_or_else(|| "A".to_owned(), |c| c.to_uppercase().collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: Profile,
}

/// Session persistence over a [`KeyValueStorage`] backend.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restore the persisted session, if any.
    pub fn load(&self) -> Option<Session> {
        let token = self
            .storage
            .get(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.trim().is_empty())?;

        let profile = match self.storage.get(PROFILE_KEY).ok().flatten() {
            None => Profile::default(),
            Some(raw) => match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    leptos::logging::warn!("discarding corrupt {PROFILE_KEY}: {e}");
                    self.clear();
                    return None;
                }
            },
        };

        Some(Session { token, profile })
    }

    /// Persist `session`, token first.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`StorageError`] if either write fails.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let profile = serde_json::to_string(&session.profile).map_err(|e| StorageError::Write(e.to_string()))?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(PROFILE_KEY, &profile)
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(PROFILE_KEY);
    }
}

/// In-process backend used by tests and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage` backend. Unavailable outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Ok(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Store backed by the browser's `localStorage`.
pub fn browser_store() -> SessionStore<BrowserStorage> {
    SessionStore::new(BrowserStorage)
}
