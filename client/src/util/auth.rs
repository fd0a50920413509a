//! Reactive auth transitions shared by the root, login page and shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every transition goes through [`AuthState`]'s persisting constructors and
//! then performs a single signal write, so no view observes a session that is
//! not yet stored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use wire::ApiError;

use crate::config::AuthFailurePolicy;
use crate::state::auth::AuthState;
use crate::state::session::{Session, StorageError, browser_store};

/// Restore the persisted session once after hydration.
pub fn restore_session(auth: RwSignal<AuthState>) {
    let restored = AuthState::restore(&browser_store());
    if !restored.is_authenticated() {
        leptos::logging::log!("no stored admin session");
    }
    auth.set(restored);
}

/// Persist `session` and publish it.
///
/// # Errors
///
/// Returns the storage error; the signal is left untouched.
pub fn sign_in(auth: RwSignal<AuthState>, session: Session) -> Result<(), StorageError> {
    let next = AuthState::login(&browser_store(), session)?;
    auth.set(next);
    Ok(())
}

pub fn sign_out(auth: RwSignal<AuthState>) {
    auth.set(AuthState::logout(&browser_store()));
}

/// Whether `err` should end the session under `policy`.
pub fn should_sign_out(policy: AuthFailurePolicy, err: &ApiError) -> bool {
    policy == AuthFailurePolicy::Logout && err.is_auth_rejection()
}
