//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON payloads so serde round-trips stay
//! lossless. Open-ended lesson fields (materials, flow, ...) stay as raw JSON
//! because the client never interprets their shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Raw JSON object list used for opaque structured lesson fields.
pub type JsonList = Vec<serde_json::Value>;

/// A role assignment attached to a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRole {
    pub role: String,
    #[serde(default)]
    pub scope: serde_json::Map<String, serde_json::Value>,
}

/// The authenticated teacher as returned by `/auth/session` and `/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    /// BCP 47 locale tag, e.g. `"en-US"`.
    pub locale: String,
    #[serde(default)]
    pub preferred_subjects: Vec<String>,
    #[serde(default)]
    pub preferred_grade_levels: Vec<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    #[serde(default)]
    pub roles: Vec<UserRole>,
}

impl User {
    /// Name shown in chrome: full name when set, otherwise the email.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// First assigned role, falling back to `teacher`.
    pub fn primary_role(&self) -> &str {
        self.roles.first().map_or("teacher", |r| r.role.as_str())
    }
}

/// Response of `GET /auth/session`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSessionResponse {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl AuthSessionResponse {
    /// The session user, only when the server reports an authenticated session.
    pub fn into_user(self) -> Option<User> {
        if self.authenticated { self.user } else { None }
    }
}

/// Response of `GET /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUrlResponse {
    pub authorization_url: String,
}

/// Body of `PUT /me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfilePayload {
    /// Serialized as `null` when cleared.
    pub full_name: Option<String>,
    pub preferred_subjects: Vec<String>,
    pub preferred_grade_levels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// A lesson as it appears in list results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub subject: String,
    pub grade_level: String,
    pub language: String,
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visibility: String,
    /// Version the lesson currently treats as authoritative.
    pub current_version_id: Option<String>,
    pub updated_at: String,
}

/// One immutable revision of a lesson.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonVersion {
    pub id: String,
    pub lesson_id: String,
    pub version_no: i64,
    pub objective: Option<String>,
    pub duration_minutes: Option<i64>,
    pub teacher_script_md: Option<String>,
    #[serde(default)]
    pub materials: JsonList,
    #[serde(default)]
    pub flow: JsonList,
    #[serde(default)]
    pub differentiation: JsonList,
    #[serde(default)]
    pub assessments: JsonList,
    #[serde(default)]
    pub accommodations: JsonList,
    #[serde(default)]
    pub source: serde_json::Map<String, serde_json::Value>,
    pub created_at: String,
    pub created_by_user_id: Option<String>,
}

/// A lesson with owner and full version history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LessonDetail {
    #[serde(flatten)]
    pub summary: LessonSummary,
    pub owner_user_id: String,
    #[serde(default)]
    pub versions: Vec<LessonVersion>,
}

/// Body of `POST /lessons`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateLessonPayload {
    pub title: String,
    pub subject: String,
    pub grade_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_script_md: Option<String>,
}

/// Body of `POST /lessons/{id}/versions`. Only populated fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateLessonVersionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_script_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<JsonList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<JsonList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub differentiation: Option<JsonList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessments: Option<JsonList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accommodations: Option<JsonList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response of `POST /lessons/{id}/restore/{version_no}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestoreResponse {
    pub lesson_id: String,
    pub current_version_id: String,
    pub restored_version: i64,
}

/// Audience a differentiated version is generated for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifferentiationAudience {
    #[default]
    Ell,
    Iep,
    Gifted,
}

impl DifferentiationAudience {
    pub const ALL: [Self; 3] = [Self::Ell, Self::Iep, Self::Gifted];

    /// Wire tag, e.g. `"ELL"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ell => "ELL",
            Self::Iep => "IEP",
            Self::Gifted => "GIFTED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ell => "English language learners",
            Self::Iep => "Students with IEPs",
            Self::Gifted => "Advanced/Gifted students",
        }
    }

    /// Parse a wire tag as produced by [`Self::as_str`].
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw)
    }
}

/// Body of `POST /lessons/{id}/differentiate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DifferentiatePayload {
    pub audience: DifferentiationAudience,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /lessons/{id}/share`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in_hours: Option<u32>,
}

/// A freshly minted share link. Never cached.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareCreateResponse {
    pub token: String,
    pub url: String,
    pub expires_at: Option<String>,
}

/// Export target for `GET /lessons/{id}/export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
    Gdoc,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Pdf, Self::Docx, Self::Gdoc];

    /// Query-string value and file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Gdoc => "gdoc",
        }
    }

    /// Whether the server answers with a file body rather than JSON.
    pub fn is_binary(self) -> bool {
        !matches!(self, Self::Gdoc)
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Self::Gdoc => "application/json",
        }
    }

    /// Button label, e.g. `"PDF"`.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

/// JSON answer for the document-style (`gdoc`) export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GdocExport {
    pub status: String,
    pub title: String,
}

/// Aggregate counters over a rolling window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub lessons_created: u64,
    pub lessons_generated: u64,
    pub lessons_differentiated: u64,
    pub exports: u64,
    pub lms_pushes: u64,
    pub total_lessons: u64,
    pub estimated_time_saved_minutes: u64,
}

/// Body of `POST /lms/google-classroom/connect`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassroomConnectRequest {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<u32>,
    pub profile: Option<std::collections::BTreeMap<String, String>>,
}

/// A linked Google Classroom account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassroomConnection {
    pub id: String,
    pub provider: String,
    pub created_at: String,
    pub expires_at: Option<String>,
    pub profile: Option<std::collections::BTreeMap<String, String>>,
}

/// Body of `POST /lms/google-classroom/push`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassroomPushRequest {
    pub lesson_id: String,
    pub course_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// Record of one assignment posted to Classroom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassroomPush {
    pub id: String,
    pub status: String,
    pub external_assignment_id: Option<String>,
    pub created_at: String,
}
