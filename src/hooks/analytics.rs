//! Dashboard analytics hook.

use leptos::prelude::*;

use super::query::use_query;
use crate::net::api;
use crate::net::types::AnalyticsSummary;
use crate::state::query_cache::QueryState;
use crate::state::query_key::QueryKey;
use crate::util::format::clamp_days;

/// Summaries stay fresh for a minute before a remount refetches them.
pub const ANALYTICS_STALE_MS: f64 = 60_000.0;

/// Summary for the last `days` days, clamped to the backend range.
pub fn use_analytics_summary(days: impl Fn() -> u32 + Send + Sync + 'static) -> Signal<QueryState<AnalyticsSummary>> {
    use_query(
        move || Some(clamp_days(days())),
        |days: &u32| QueryKey::analytics_summary(*days),
        ANALYTICS_STALE_MS,
        |days: u32| async move { api::fetch_analytics_summary(days).await },
    )
}
