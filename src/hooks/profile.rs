//! Profile update mutation.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::client::ApiError;
use crate::net::types::{UpdateProfilePayload, User};
use crate::state::query_cache::QueryCache;
use crate::state::query_key::QueryKey;
use crate::util::browser::now_ms;

/// Replace the cached session user with the server's copy.
pub fn record_profile(cache: &mut QueryCache, user: &User, now_ms: f64) {
    cache.store(&QueryKey::session(), &Some(user), now_ms);
}

/// `PUT /me`, then refresh the session user in place.
///
/// # Errors
///
/// Returns [`ApiError`] if the update is rejected.
pub async fn update_profile(cache: RwSignal<QueryCache>, payload: UpdateProfilePayload) -> Result<User, ApiError> {
    let user = api::update_profile(&payload).await?;
    cache.update(|c| record_profile(c, &user, now_ms()));
    Ok(user)
}
