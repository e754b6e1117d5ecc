//! Request cache shared by every data hook.
//!
//! DESIGN
//! ======
//! Entries hold raw JSON so one map can serve every resource type; hooks
//! decode on read. The cache itself is plain data behind one
//! `RwSignal<QueryCache>`, which keeps staleness and invalidation rules
//! testable without a reactive runtime.
//!
//! Per-key `fetching` flags serialize fetches for a key while unrelated keys
//! proceed independently. Failed fetches are never retried until the entry is
//! invalidated or reset.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::query_key::QueryKey;

/// Observable state of one cached query, decoded to `T`.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    /// No key: the query is switched off and never issued.
    Disabled,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// One cache slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CacheEntry {
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    /// A request for this key is in flight.
    pub fetching: bool,
    /// Invalidated: the next read should refetch.
    pub stale: bool,
    /// Timestamp (ms) of the last successful store.
    pub updated_at_ms: f64,
    /// How long stored data counts as fresh, in ms. Zero means fresh until invalidated.
    pub stale_time_ms: f64,
}

impl CacheEntry {
    fn expired(&self, now_ms: f64) -> bool {
        self.stale_time_ms > 0.0 && now_ms - self.updated_at_ms >= self.stale_time_ms
    }
}

/// Keyed store of server data.
#[derive(Clone, Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn entry(&self, key: &QueryKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.stale)
    }

    pub fn is_fetching(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|e| e.fetching)
    }

    /// Whether a hook reading `key` at `now_ms` should issue a request.
    pub fn should_fetch(&self, key: &QueryKey, now_ms: f64) -> bool {
        let Some(entry) = self.entries.get(key) else {
            return true;
        };
        if entry.fetching {
            return false;
        }
        if entry.stale {
            return true;
        }
        match (&entry.data, &entry.error) {
            (None, None) => true,
            (Some(_), _) => entry.expired(now_ms),
            (None, Some(_)) => false,
        }
    }

    /// Mark `key` as in flight, creating the entry if needed.
    pub fn begin_fetch(&mut self, key: &QueryKey, stale_time_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.fetching = true;
        entry.stale_time_ms = stale_time_ms;
    }

    /// Store a successful fetch result.
    pub fn resolve_ok(&mut self, key: &QueryKey, data: serde_json::Value, now_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.data = Some(data);
        entry.error = None;
        entry.fetching = false;
        entry.stale = false;
        entry.updated_at_ms = now_ms;
    }

    /// Store a failed fetch. The previous data is dropped so readers observe the failure.
    pub fn resolve_err(&mut self, key: &QueryKey, message: impl Into<String>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.data = None;
        entry.error = Some(message.into());
        entry.fetching = false;
        entry.stale = false;
    }

    /// Typed [`Self::resolve_ok`]: finishes the in-flight fetch for `key`.
    /// A value that cannot be encoded resolves as a failure.
    pub fn resolve<T: Serialize>(&mut self, key: &QueryKey, value: &T, now_ms: f64) {
        match serde_json::to_value(value) {
            Ok(data) => self.resolve_ok(key, data, now_ms),
            Err(e) => self.resolve_err(key, e.to_string()),
        }
    }

    /// Replace data directly, without a request. An in-flight fetch keeps running.
    pub fn set_data(&mut self, key: &QueryKey, data: serde_json::Value, now_ms: f64) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.data = Some(data);
        entry.error = None;
        entry.stale = false;
        entry.updated_at_ms = now_ms;
    }

    /// Typed [`Self::set_data`]. If `value` cannot be encoded the entry is
    /// invalidated instead so the next read refetches.
    pub fn store<T: Serialize>(&mut self, key: &QueryKey, value: &T, now_ms: f64) {
        match serde_json::to_value(value) {
            Ok(data) => self.set_data(key, data, now_ms),
            Err(e) => {
                leptos::logging::warn!("cache store failed for {key}: {e}");
                self.invalidate(key);
            }
        }
    }

    /// Insert `item` at the front of the list stored under `key`.
    pub fn prepend<T: Serialize>(&mut self, key: &QueryKey, item: &T, now_ms: f64) {
        let item = match serde_json::to_value(item) {
            Ok(item) => item,
            Err(e) => {
                leptos::logging::warn!("cache prepend failed for {key}: {e}");
                return;
            }
        };
        let mut list = match self.entries.get(key).and_then(|e| e.data.clone()) {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        };
        list.insert(0, item);
        self.set_data(key, serde_json::Value::Array(list), now_ms);
    }

    /// Mark every entry under `prefix` stale. Returns how many were marked.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in &mut self.entries {
            if key.starts_with(prefix) {
                entry.stale = true;
                count += 1;
            }
        }
        count
    }

    /// Drop `key` entirely so readers see `Loading` until the next fetch lands.
    pub fn reset(&mut self, key: &QueryKey) {
        self.entries.remove(key);
    }

    /// Decode the entry for `key`. Stale entries that still hold data report
    /// `Ready`; the refetch happens in the background.
    pub fn state<T: DeserializeOwned>(&self, key: &QueryKey) -> QueryState<T> {
        let Some(entry) = self.entries.get(key) else {
            return QueryState::Loading;
        };
        if let Some(data) = &entry.data {
            return match T::deserialize(data) {
                Ok(value) => QueryState::Ready(value),
                Err(e) => QueryState::Failed(e.to_string()),
            };
        }
        match &entry.error {
            Some(message) => QueryState::Failed(message.clone()),
            None => QueryState::Loading,
        }
    }

    /// Decoded data for `key`, if any.
    pub fn data<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        self.state(key).into_data()
    }
}
