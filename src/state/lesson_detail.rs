//! Form and workflow state for the lesson detail page.
//!
//! DESIGN
//! ======
//! Each workflow keeps its inputs as raw strings, exactly as typed, and
//! converts to a wire payload only at submit time. Validation lives here so the
//! page component stays a thin binding layer and the rules are testable
//! without a browser.

#[cfg(test)]
#[path = "lesson_detail_test.rs"]
mod lesson_detail_test;

use crate::net::types::{
    ClassroomPushRequest, CreateLessonVersionPayload, DifferentiatePayload, DifferentiationAudience, ExportFormat,
    LessonDetail, LessonVersion, ShareCreateRequest,
};

/// Status options offered by the version form.
pub const VERSION_STATUSES: [(&str, &str); 2] = [("draft", "Draft"), ("published", "Published")];

pub const VERSION_SAVE_ERROR: &str = "Failed to save version. Try again.";
pub const RESTORE_ERROR: &str = "Unable to restore version. Please try again.";
pub const DIFFERENTIATE_ERROR: &str = "Unable to create a differentiated version. Please try again.";
pub const EXPORT_ERROR: &str = "Export failed. Please try again.";
pub const SHARE_EXPIRY_ERROR: &str = "Expiration must be a positive number of hours or left blank.";
pub const SHARE_ERROR: &str = "Unable to generate share link. Please try again.";
pub const COURSE_REQUIRED: &str = "Course ID is required.";
pub const CONNECTED: &str = "Connected!";
pub const CONNECT_ERROR: &str = "Unable to connect Classroom. Please try again.";
pub const ASSIGNMENT_POSTED: &str = "Assignment posted.";
pub const PUSH_ERROR: &str = "Unable to post the assignment. Please try again.";

/// Default share-link lifetime shown in the expiry field.
pub const DEFAULT_SHARE_HOURS: &str = "72";

fn non_blank(raw: &str) -> Option<String> {
    if raw.trim().is_empty() { None } else { Some(raw.to_owned()) }
}

// ---- new version ----

/// Inputs of the "new version" form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionForm {
    pub objective: String,
    /// Teacher notes in Markdown.
    pub teacher_script_md: String,
    pub status: String,
}

impl Default for VersionForm {
    fn default() -> Self {
        Self {
            objective: String::new(),
            teacher_script_md: String::new(),
            status: "draft".to_owned(),
        }
    }
}

impl VersionForm {
    /// Sparse payload: blank fields are left out of the request body.
    pub fn to_payload(&self) -> CreateLessonVersionPayload {
        CreateLessonVersionPayload {
            objective: non_blank(&self.objective),
            teacher_script_md: non_blank(&self.teacher_script_md),
            status: non_blank(&self.status),
            ..CreateLessonVersionPayload::default()
        }
    }
}

// ---- differentiate ----

/// Inputs of the differentiation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffForm {
    pub audience: DifferentiationAudience,
    pub notes: String,
}

impl DiffForm {
    pub fn to_payload(&self) -> DifferentiatePayload {
        let notes = self.notes.trim();
        DifferentiatePayload {
            audience: self.audience,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        }
    }
}

pub fn differentiate_success(audience: DifferentiationAudience) -> String {
    format!("Created {} differentiated version.", audience.as_str())
}

// ---- export ----

/// Download name for a binary export: `<title>.<ext>`, `lesson.<ext>` without a title.
pub fn export_filename(title: Option<&str>, format: ExportFormat) -> String {
    let stem = match title.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => "lesson",
    };
    format!("{stem}.{}", format.as_str())
}

pub fn export_downloaded_message(format: ExportFormat) -> String {
    format!("Downloaded {} export.", format.label())
}

pub fn gdoc_ready_message(title: &str) -> String {
    format!("GDoc export ready: {title}")
}

/// Label for an export button given the in-flight slot.
pub fn export_button_label(format: ExportFormat, exporting: Option<ExportFormat>) -> String {
    if exporting == Some(format) {
        format!("Exporting {}…", format.label())
    } else {
        format.label()
    }
}

/// Claim the single export slot. Returns `false` when another export is in flight.
pub fn try_begin_export(slot: &mut Option<ExportFormat>, format: ExportFormat) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(format);
    true
}

// ---- share ----

/// Parse the share-expiry field.
///
/// Blank means "no expiry sent". Anything else must be a finite number of
/// at least one hour; fractional hours round down to whole hours.
///
/// # Errors
///
/// Returns the inline validation message when the value is unusable.
pub fn parse_share_expiry(raw: &str) -> Result<ShareCreateRequest, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(ShareCreateRequest::default());
    }
    let hours: f64 = trimmed.parse().map_err(|_| SHARE_EXPIRY_ERROR)?;
    if !hours.is_finite() || hours < 1.0 {
        return Err(SHARE_EXPIRY_ERROR);
    }
    let whole = hours.floor();
    if whole > f64::from(u32::MAX) {
        return Err(SHARE_EXPIRY_ERROR);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let expires_in_hours = whole as u32;
    Ok(ShareCreateRequest {
        expires_in_hours: Some(expires_in_hours),
    })
}

// ---- lms push ----

/// Inputs of the "post assignment" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushForm {
    pub course_id: String,
    pub topic_id: String,
    pub due_date: String,
}

impl PushForm {
    /// Build the push request for `lesson_id`.
    ///
    /// # Errors
    ///
    /// Returns [`COURSE_REQUIRED`] when the course id is blank.
    pub fn to_request(&self, lesson_id: &str) -> Result<ClassroomPushRequest, &'static str> {
        let course_id = self.course_id.trim();
        if course_id.is_empty() {
            return Err(COURSE_REQUIRED);
        }
        Ok(ClassroomPushRequest {
            lesson_id: lesson_id.to_owned(),
            course_id: course_id.to_owned(),
            topic_id: non_blank(self.topic_id.trim()),
            due_date: non_blank(self.due_date.trim()),
        })
    }
}

// ---- versions ----

/// Versions newest first by `version_no`.
pub fn sort_versions_desc(versions: &[LessonVersion]) -> Vec<LessonVersion> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| b.version_no.cmp(&a.version_no));
    sorted
}

pub fn is_current(lesson: &LessonDetail, version: &LessonVersion) -> bool {
    lesson.summary.current_version_id.as_deref() == Some(version.id.as_str())
}

/// Only non-current versions offer a restore control.
pub fn can_restore(lesson: &LessonDetail, version: &LessonVersion) -> bool {
    !is_current(lesson, version)
}
