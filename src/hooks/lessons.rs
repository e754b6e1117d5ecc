//! Lesson resource hooks and mutations.
//!
//! DESIGN
//! ======
//! Reads go through `use_query` keyed by `QueryKey::lessons` and
//! `QueryKey::lesson_detail`. Mutations are plain async functions that call the
//! API and then apply their cache rule, so a page only decides when to call
//! them and what message to show.

#[cfg(test)]
#[path = "lessons_test.rs"]
mod lessons_test;

use leptos::prelude::*;

use super::query::{NO_STALE_TIME, use_query};
use crate::net::api::{self, LessonFilters};
use crate::net::client::ApiError;
use crate::net::types::{
    CreateLessonPayload, CreateLessonVersionPayload, DifferentiatePayload, LessonDetail, LessonSummary,
    LessonVersion, RestoreResponse, ShareCreateRequest, ShareCreateResponse,
};
use crate::state::query_cache::{QueryCache, QueryState};
use crate::state::query_key::QueryKey;

/// Lesson list for the current filter set.
pub fn use_lessons(
    filters: impl Fn() -> LessonFilters + Send + Sync + 'static,
) -> Signal<QueryState<Vec<LessonSummary>>> {
    use_query(
        move || Some(filters()),
        QueryKey::lessons,
        NO_STALE_TIME,
        |f: LessonFilters| async move { api::fetch_lessons(&f).await },
    )
}

/// One lesson with its versions. An empty id disables the query.
pub fn use_lesson(lesson_id: impl Fn() -> String + Send + Sync + 'static) -> Signal<QueryState<LessonDetail>> {
    use_query(
        move || lesson_detail_params(lesson_id()),
        |id: &String| QueryKey::lesson_detail(id),
        NO_STALE_TIME,
        |id: String| async move { api::fetch_lesson(&id).await },
    )
}

/// Detail query parameters; a blank id switches the query off.
pub fn lesson_detail_params(lesson_id: String) -> Option<String> {
    Some(lesson_id).filter(|id| !id.trim().is_empty())
}

/// Cache rule after any change to one lesson: its detail and every list refetch.
pub fn invalidate_lesson(cache: &mut QueryCache, lesson_id: &str) {
    cache.invalidate(&QueryKey::lesson_detail(lesson_id));
    cache.invalidate(&QueryKey::lessons_family());
}

/// `POST /lessons`, then refetch every lesson list.
///
/// # Errors
///
/// Returns [`ApiError`] if creation fails; the cache is untouched.
pub async fn create_lesson(
    cache: RwSignal<QueryCache>,
    payload: CreateLessonPayload,
) -> Result<LessonDetail, ApiError> {
    let lesson = api::create_lesson(&payload).await?;
    cache.update(|c| {
        c.invalidate(&QueryKey::lessons_family());
    });
    Ok(lesson)
}

/// `POST /lessons/{id}/versions`.
///
/// # Errors
///
/// Returns [`ApiError`] if the version is rejected.
pub async fn create_version(
    cache: RwSignal<QueryCache>,
    lesson_id: String,
    payload: CreateLessonVersionPayload,
) -> Result<LessonVersion, ApiError> {
    let version = api::create_lesson_version(&lesson_id, &payload).await?;
    cache.update(|c| invalidate_lesson(c, &lesson_id));
    Ok(version)
}

/// `POST /lessons/{id}/restore/{version_no}`. The new order shows after the refetch.
///
/// # Errors
///
/// Returns [`ApiError`] if the restore fails.
pub async fn restore_version(
    cache: RwSignal<QueryCache>,
    lesson_id: String,
    version_no: i64,
) -> Result<RestoreResponse, ApiError> {
    let restored = api::restore_lesson_version(&lesson_id, version_no).await?;
    cache.update(|c| invalidate_lesson(c, &lesson_id));
    Ok(restored)
}

/// `POST /lessons/{id}/differentiate`.
///
/// # Errors
///
/// Returns [`ApiError`] if generation fails.
pub async fn differentiate(
    cache: RwSignal<QueryCache>,
    lesson_id: String,
    payload: DifferentiatePayload,
) -> Result<LessonVersion, ApiError> {
    let version = api::differentiate_lesson(&lesson_id, &payload).await?;
    cache.update(|c| invalidate_lesson(c, &lesson_id));
    Ok(version)
}

/// `POST /lessons/{id}/share`. Share links are never cached.
///
/// # Errors
///
/// Returns [`ApiError`] if the link cannot be created.
pub async fn create_share(lesson_id: String, request: ShareCreateRequest) -> Result<ShareCreateResponse, ApiError> {
    api::create_lesson_share(&lesson_id, &request).await
}
