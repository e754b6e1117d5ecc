//! Google Classroom connection and assignment pushes.
//!
//! DESIGN
//! ======
//! There is no endpoint listing pushes, so the pushes list for a lesson is
//! built client-side: each successful push is prepended to the cached list.

#[cfg(test)]
#[path = "classroom_test.rs"]
mod classroom_test;

use leptos::prelude::*;

use super::query::use_cache;
use crate::net::api;
use crate::net::client::ApiError;
use crate::net::types::{ClassroomConnection, ClassroomPush, ClassroomPushRequest};
use crate::state::query_cache::QueryCache;
use crate::state::query_key::QueryKey;
use crate::util::browser::now_ms;

/// The linked account, once connected in this session.
pub fn use_classroom_connection() -> Signal<Option<ClassroomConnection>> {
    let cache = use_cache();
    Signal::derive(move || cache.with(|c| c.data(&QueryKey::classroom_connection())))
}

/// Pushes made for `lesson_id`, newest first.
pub fn use_classroom_pushes(lesson_id: impl Fn() -> String + Send + Sync + 'static) -> Signal<Vec<ClassroomPush>> {
    let cache = use_cache();
    Signal::derive(move || {
        let key = QueryKey::classroom_pushes(&lesson_id());
        cache.with(|c| c.data(&key).unwrap_or_default())
    })
}

pub fn record_connection(cache: &mut QueryCache, connection: &ClassroomConnection, now_ms: f64) {
    cache.store(&QueryKey::classroom_connection(), connection, now_ms);
}

pub fn record_push(cache: &mut QueryCache, lesson_id: &str, push: &ClassroomPush, now_ms: f64) {
    cache.prepend(&QueryKey::classroom_pushes(lesson_id), push, now_ms);
}

/// Link a Classroom account and remember the connection.
///
/// # Errors
///
/// Returns [`ApiError`] if the account cannot be linked.
pub async fn connect(cache: RwSignal<QueryCache>) -> Result<ClassroomConnection, ApiError> {
    let connection = api::connect_google_classroom().await?;
    cache.update(|c| record_connection(c, &connection, now_ms()));
    Ok(connection)
}

/// Post the lesson as an assignment and add it to the pushes list.
///
/// # Errors
///
/// Returns [`ApiError`] if the assignment cannot be posted.
pub async fn push_assignment(
    cache: RwSignal<QueryCache>,
    request: ClassroomPushRequest,
) -> Result<ClassroomPush, ApiError> {
    let push = api::push_google_classroom_assignment(&request).await?;
    cache.update(|c| record_push(c, &request.lesson_id, &push, now_ms()));
    Ok(push)
}
