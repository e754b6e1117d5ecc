//! Authentication context built on the cached session query.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` calls [`provide_auth`] once. Route guards, the layout and the profile
//! page read it back with [`use_auth`].
//!
//! ERROR HANDLING
//! ==============
//! The session check is never retried. `logout` reports failure to its caller
//! and leaves the session untouched in that case.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use super::query::{NO_STALE_TIME, use_cache, use_query};
use crate::net::api;
use crate::net::client::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::query_cache::QueryCache;
use crate::state::query_key::QueryKey;
use crate::util::browser::now_ms;

/// Handle to the session shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    cache: RwSignal<QueryCache>,
    state: Memo<AuthState>,
}

/// Start the session check and provide the [`AuthContext`].
pub fn provide_auth() -> AuthContext {
    let cache = use_cache();
    let session = use_query(
        || Some(()),
        |_| QueryKey::session(),
        NO_STALE_TIME,
        |()| api::fetch_session(),
    );
    let state = Memo::new(move |_| AuthState::from_query(session.get()));
    let ctx = AuthContext { cache, state };
    provide_context(ctx);
    ctx
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

impl AuthContext {
    pub fn state(self) -> Memo<AuthState> {
        self.state
    }

    /// Current user without subscribing to changes.
    pub fn user(self) -> Option<User> {
        self.state.with_untracked(|s| s.user.clone())
    }

    /// Re-run the session check. Status reads `Loading` until it lands.
    pub async fn refresh(self) {
        self.cache.update(begin_refresh);
        let result = api::fetch_session().await.map_err(|e| {
            leptos::logging::warn!("session refresh failed: {e}");
            e.to_string()
        });
        self.cache.update(|c| finish_refresh(c, result, now_ms()));
    }

    /// End the server session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the server did not end the session.
    pub async fn logout(self) -> Result<(), ApiError> {
        api::logout().await?;
        self.cache.update(|c| mark_signed_out(c, now_ms()));
        Ok(())
    }
}

/// Cache effect of a successful logout: the session reads "no user" at once
/// and is re-checked in the background.
pub fn mark_signed_out(cache: &mut QueryCache, now_ms: f64) {
    let key = QueryKey::session();
    cache.store(&key, &Option::<User>::None, now_ms);
    cache.invalidate(&key);
}

/// Drop the cached session and mark the re-check in flight.
pub fn begin_refresh(cache: &mut QueryCache) {
    let key = QueryKey::session();
    cache.reset(&key);
    cache.begin_fetch(&key, NO_STALE_TIME);
}

/// Land a session re-check, clearing the in-flight flag either way.
pub fn finish_refresh(cache: &mut QueryCache, result: Result<Option<User>, String>, now_ms: f64) {
    let key = QueryKey::session();
    match result {
        Ok(user) => cache.resolve(&key, &user, now_ms),
        Err(message) => cache.resolve_err(&key, message),
    }
}
