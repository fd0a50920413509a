use super::*;
use crate::state::session::{MemoryStorage, PROFILE_KEY, Profile, TOKEN_KEY};

fn sample_session() -> Session {
    Session {
        token: "abc".to_owned(),
        profile: Profile { admin_id: Some(1), name: "A".to_owned(), email: "a@x.com".to_owned() },
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.is_loading());
    assert!(state.session().is_none());
}

// =============================================================
// restore / login / logout
// =============================================================

#[test]
fn restore_without_token_is_unauthenticated() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(AuthState::restore(&store), AuthState::Unauthenticated);
}

#[test]
fn login_then_fresh_restore_yields_same_session() {
    let storage = MemoryStorage::new();
    let state = AuthState::login(&SessionStore::new(storage.clone()), sample_session()).unwrap();
    assert_eq!(state, AuthState::Authenticated(sample_session()));

    let restored = AuthState::restore(&SessionStore::new(storage));
    assert_eq!(restored.session(), Some(&sample_session()));
}

#[test]
fn logout_then_restore_is_unauthenticated_with_no_token() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    AuthState::login(&store, sample_session()).unwrap();

    assert_eq!(AuthState::logout(&store), AuthState::Unauthenticated);
    assert_eq!(AuthState::restore(&store), AuthState::Unauthenticated);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
}

#[test]
fn corrupt_profile_restores_unauthenticated() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(PROFILE_KEY, "[[[").unwrap();
    assert_eq!(AuthState::restore(&SessionStore::new(storage)), AuthState::Unauthenticated);
}

struct ReadOnly;

impl KeyValueStorage for ReadOnly {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&self, _key: &str) {}
}

#[test]
fn login_persist_failure_returns_error() {
    let err = AuthState::login(&SessionStore::new(ReadOnly), sample_session()).unwrap_err();
    assert_eq!(err, StorageError::Unavailable);
}
