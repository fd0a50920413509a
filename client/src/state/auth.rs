//! Authentication gate state owned by the root component.
//!
//! DESIGN
//! ======
//! Transitions persist before they publish: `login` saves the session and
//! only then yields `Authenticated`, `logout` clears storage and then yields
//! `Unauthenticated`. The reactive wrapper in `util::auth` performs exactly
//! one signal write per transition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::{KeyValueStorage, Session, SessionStore, StorageError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// Restoration has not run yet. Server rendering stays here.
    #[default]
    Loading,
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// State restored from persisted storage.
    pub fn restore<S: KeyValueStorage>(store: &SessionStore<S>) -> Self {
        store.load().map_or(Self::Unauthenticated, Self::Authenticated)
    }

    /// Persist `session` and return the authenticated state.
    ///
    /// # Errors
    ///
    /// Returns the storage error unchanged; the caller keeps its prior state.
    pub fn login<S: KeyValueStorage>(store: &SessionStore<S>, session: Session) -> Result<Self, StorageError> {
        store.save(&session)?;
        Ok(Self::Authenticated(session))
    }

    /// Clear persisted state and return the signed-out state.
    pub fn logout<S: KeyValueStorage>(store: &SessionStore<S>) -> Self {
        store.clear();
        Self::Unauthenticated
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}
