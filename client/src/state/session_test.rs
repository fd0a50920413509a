use super::*;

fn session(token: &str, name: &str, email: &str) -> Session {
    Session {
        token: token.to_owned(),
        profile: Profile { admin_id: None, name: name.to_owned(), email: email.to_owned() },
    }
}

#[derive(Default)]
struct FailingProfileWrites {
    inner: MemoryStorage,
}

impl KeyValueStorage for FailingProfileWrites {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == PROFILE_KEY {
            return Err(StorageError::Write("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) {
        self.inner.remove(key);
    }
}

// =============================================================
// load / save
// =============================================================

#[test]
fn save_then_load_round_trips_token_and_profile() {
    let store = SessionStore::new(MemoryStorage::new());
    let saved = session("abc", "A", "a@x.com");
    store.save(&saved).unwrap();
    assert_eq!(store.load(), Some(saved));
}

#[test]
fn load_without_token_is_none() {
    let store = SessionStore::new(MemoryStorage::new());
    assert_eq!(store.load(), None);
}

#[test]
fn blank_token_is_none() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "  ").unwrap();
    assert_eq!(SessionStore::new(storage).load(), None);
}

#[test]
fn token_without_profile_restores_empty_profile() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    let restored = SessionStore::new(storage).load().unwrap();
    assert_eq!(restored.token, "abc");
    assert_eq!(restored.profile, Profile::default());
}

#[test]
fn corrupt_profile_is_no_session_and_is_cleared() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "abc").unwrap();
    storage.set(PROFILE_KEY, "{not json").unwrap();
    let store = SessionStore::new(storage.clone());

    assert_eq!(store.load(), None);
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(PROFILE_KEY).unwrap(), None);
}

#[test]
fn save_failure_is_returned() {
    let store = SessionStore::new(FailingProfileWrites::default());
    let err = store.save(&session("abc", "A", "a@x.com")).unwrap_err();
    assert_eq!(err, StorageError::Write("quota exceeded".into()));
    assert_eq!(store.storage().get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
}

#[test]
fn clear_removes_both_entries() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(storage.clone());
    store.save(&session("abc", "A", "a@x.com")).unwrap();
    store.clear();
    assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    assert_eq!(storage.get(PROFILE_KEY).unwrap(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    assert_eq!(BrowserStorage.get(TOKEN_KEY), Err(StorageError::Unavailable));
    assert_eq!(browser_store().load(), None);
}

// =============================================================
// Profile display
// =============================================================

#[test]
fn profile_falls_back_to_admin() {
    let profile = Profile::default();
    assert_eq!(profile.display_name(), "Admin");
    assert_eq!(profile.initial(), "A");
}

#[test]
fn profile_initial_is_uppercased() {
    let profile = Profile { admin_id: Some(1), name: "sara".into(), email: String::new() };
    assert_eq!(profile.display_name(), "sara");
    assert_eq!(profile.initial(), "S");
}
