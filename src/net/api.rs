//! One async function per backend endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks in `crate::hooks` wrap these calls with cache keys and invalidation;
//! pages call them directly only for uncached actions (export, share, login).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{self, ApiError, QueryPairs};
use super::types::{
    AnalyticsSummary, AuthSessionResponse, ClassroomConnectRequest, ClassroomConnection, ClassroomPush,
    ClassroomPushRequest, CreateLessonPayload, CreateLessonVersionPayload, DifferentiatePayload, ExportFormat,
    GdocExport, LessonDetail, LessonSummary, LessonVersion, LoginUrlResponse, RestoreResponse, ShareCreateRequest,
    ShareCreateResponse, UpdateProfilePayload, User,
};

/// Filters accepted by `GET /lessons`. Absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LessonFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

impl LessonFilters {
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.grade_level.is_none() && self.tags.is_empty()
    }

    /// Query pairs with `tags` repeated once per tag.
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = Vec::new();
        if let Some(subject) = &self.subject {
            pairs.push(("subject", subject.clone()));
        }
        if let Some(grade) = &self.grade_level {
            pairs.push(("grade_level", grade.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

fn lesson_path(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}")
}

fn lesson_versions_path(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}/versions")
}

fn lesson_restore_path(lesson_id: &str, version_no: i64) -> String {
    format!("/lessons/{lesson_id}/restore/{version_no}")
}

fn lesson_export_path(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}/export")
}

fn lesson_differentiate_path(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}/differentiate")
}

fn lesson_share_path(lesson_id: &str) -> String {
    format!("/lessons/{lesson_id}/share")
}

fn export_query(format: ExportFormat) -> QueryPairs {
    vec![("format", format.as_str().to_owned())]
}

fn analytics_query(days: u32) -> QueryPairs {
    vec![("days", days.to_string())]
}

/// Credentials posted on connect. The OAuth exchange happens server-side,
/// so the client only registers placeholder tokens.
fn classroom_connect_request() -> ClassroomConnectRequest {
    ClassroomConnectRequest {
        access_token: "stub-access-token".to_owned(),
        refresh_token: Some("stub-refresh-token".to_owned()),
        expires_in: Some(3600),
        profile: Some(std::iter::once(("teacher".to_owned(), "You".to_owned())).collect()),
    }
}

// ---- auth ----

/// `GET /auth/session`: the current user, or `None` without a session.
///
/// # Errors
///
/// Returns [`ApiError`] when the check itself fails.
pub async fn fetch_session() -> Result<Option<User>, ApiError> {
    let resp: AuthSessionResponse = client::get_json("/auth/session", Vec::new()).await?;
    Ok(resp.into_user())
}

/// `GET /auth/login`: the OAuth authorization URL to navigate to.
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails.
pub async fn request_login_url() -> Result<String, ApiError> {
    let resp: LoginUrlResponse = client::get_json("/auth/login", Vec::new()).await?;
    Ok(resp.authorization_url)
}

/// `POST /auth/logout`.
///
/// # Errors
///
/// Returns [`ApiError`] if the server did not end the session.
pub async fn logout() -> Result<(), ApiError> {
    client::post_ignore("/auth/logout").await
}

// ---- profile ----

/// `PUT /me`.
///
/// # Errors
///
/// Returns [`ApiError`] if the update is rejected.
pub async fn update_profile(payload: &UpdateProfilePayload) -> Result<User, ApiError> {
    client::put_json("/me", payload).await
}

// ---- lessons ----

/// `GET /lessons` with optional filters.
///
/// # Errors
///
/// Returns [`ApiError`] if the list cannot be loaded.
pub async fn fetch_lessons(filters: &LessonFilters) -> Result<Vec<LessonSummary>, ApiError> {
    client::get_json("/lessons", filters.query_pairs()).await
}

/// `GET /lessons/{id}`.
///
/// # Errors
///
/// Returns [`ApiError`] if the lesson cannot be loaded.
pub async fn fetch_lesson(lesson_id: &str) -> Result<LessonDetail, ApiError> {
    client::get_json(&lesson_path(lesson_id), Vec::new()).await
}

/// `POST /lessons`.
///
/// # Errors
///
/// Returns [`ApiError`] if creation fails.
pub async fn create_lesson(payload: &CreateLessonPayload) -> Result<LessonDetail, ApiError> {
    client::post_json("/lessons", payload).await
}

/// `POST /lessons/{id}/versions`.
///
/// # Errors
///
/// Returns [`ApiError`] if the version is rejected.
pub async fn create_lesson_version(
    lesson_id: &str,
    payload: &CreateLessonVersionPayload,
) -> Result<LessonVersion, ApiError> {
    client::post_json(&lesson_versions_path(lesson_id), payload).await
}

/// `POST /lessons/{id}/restore/{version_no}`.
///
/// # Errors
///
/// Returns [`ApiError`] if the restore fails.
pub async fn restore_lesson_version(lesson_id: &str, version_no: i64) -> Result<RestoreResponse, ApiError> {
    client::post_empty(&lesson_restore_path(lesson_id, version_no)).await
}

/// `GET /lessons/{id}/export?format=pdf|docx` as raw file bytes.
///
/// # Errors
///
/// Returns [`ApiError`] if the export fails.
pub async fn download_lesson_export(lesson_id: &str, format: ExportFormat) -> Result<Vec<u8>, ApiError> {
    client::get_bytes(&lesson_export_path(lesson_id), export_query(format)).await
}

/// `GET /lessons/{id}/export?format=gdoc`.
///
/// # Errors
///
/// Returns [`ApiError`] if the export fails.
pub async fn fetch_gdoc_export(lesson_id: &str) -> Result<GdocExport, ApiError> {
    client::get_json(&lesson_export_path(lesson_id), export_query(ExportFormat::Gdoc)).await
}

/// `POST /lessons/{id}/differentiate`.
///
/// # Errors
///
/// Returns [`ApiError`] if generation fails.
pub async fn differentiate_lesson(lesson_id: &str, payload: &DifferentiatePayload) -> Result<LessonVersion, ApiError> {
    client::post_json(&lesson_differentiate_path(lesson_id), payload).await
}

/// `POST /lessons/{id}/share`.
///
/// # Errors
///
/// Returns [`ApiError`] if the link cannot be created.
pub async fn create_lesson_share(
    lesson_id: &str,
    payload: &ShareCreateRequest,
) -> Result<ShareCreateResponse, ApiError> {
    client::post_json(&lesson_share_path(lesson_id), payload).await
}

// ---- analytics ----

/// `GET /analytics/summary?days=N`.
///
/// # Errors
///
/// Returns [`ApiError`] if the summary cannot be loaded.
pub async fn fetch_analytics_summary(days: u32) -> Result<AnalyticsSummary, ApiError> {
    client::get_json("/analytics/summary", analytics_query(days)).await
}

// ---- lms ----

/// `POST /lms/google-classroom/connect`.
///
/// # Errors
///
/// Returns [`ApiError`] if the account cannot be linked.
pub async fn connect_google_classroom() -> Result<ClassroomConnection, ApiError> {
    client::post_json("/lms/google-classroom/connect", &classroom_connect_request()).await
}

/// `POST /lms/google-classroom/push`.
///
/// # Errors
///
/// Returns [`ApiError`] if the assignment cannot be posted.
pub async fn push_google_classroom_assignment(request: &ClassroomPushRequest) -> Result<ClassroomPush, ApiError> {
    client::post_json("/lms/google-classroom/push", request).await
}
