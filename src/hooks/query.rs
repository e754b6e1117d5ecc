//! Generic cached query hook.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every resource hook goes through [`use_query`]: it tracks the hook's
//! parameters and the shared [`QueryCache`], issues a fetch when the cache says
//! the entry needs one, and exposes the decoded [`QueryState`].
//!
//! DESIGN
//! ======
//! Parameters are memoized together with their key, so a hook only reacts
//! when the key actually changes. Fetches run on `spawn_local`; the per-key
//! `fetching` flag set before spawning keeps a key from being requested twice.

use std::future::Future;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::client::ApiError;
use crate::state::query_cache::{QueryCache, QueryState};
use crate::state::query_key::QueryKey;
use crate::util::browser::now_ms;

/// Fresh until invalidated.
pub const NO_STALE_TIME: f64 = 0.0;

/// The shared cache provided by `App`.
pub fn use_cache() -> RwSignal<QueryCache> {
    expect_context::<RwSignal<QueryCache>>()
}

/// Subscribe to one cached resource.
///
/// `params` returning `None` disables the query: nothing is requested and the
/// state reads [`QueryState::Disabled`].
pub fn use_query<P, T, F, Fut>(
    params: impl Fn() -> Option<P> + Send + Sync + 'static,
    key_of: fn(&P) -> QueryKey,
    stale_time_ms: f64,
    fetch: F,
) -> Signal<QueryState<T>>
where
    P: Clone + PartialEq + Send + Sync + 'static,
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn(P) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let cache = use_cache();
    let keyed = Memo::new(move |_| params().map(|p| (key_of(&p), p)));

    Effect::new(move || {
        let Some((key, p)) = keyed.get() else {
            return;
        };
        if !cache.with(|c| c.should_fetch(&key, now_ms())) {
            return;
        }
        cache.update(|c| c.begin_fetch(&key, stale_time_ms));
        leptos::task::spawn_local(async move {
            let result = fetch(p)
                .await
                .and_then(|value| serde_json::to_value(&value).map_err(|e| ApiError::Decode(e.to_string())));
            match result {
                Ok(data) => cache.update(|c| c.resolve_ok(&key, data, now_ms())),
                Err(e) => {
                    leptos::logging::warn!("query {key} failed: {e}");
                    cache.update(|c| c.resolve_err(&key, e.to_string()));
                }
            }
        });
    });

    Signal::derive(move || match keyed.get() {
        None => QueryState::Disabled,
        Some((key, _)) => cache.with(|c| c.state::<T>(&key)),
    })
}
