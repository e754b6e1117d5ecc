use super::*;

// =============================================================
// Helpers
// =============================================================

fn user_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "email": "taylor@school.org",
        "full_name": "Taylor Teacher",
        "avatar_url": null,
        "locale": "en-US",
        "preferred_subjects": ["Science"],
        "preferred_grade_levels": ["5"],
        "is_active": true,
        "is_superuser": false,
        "roles": [{ "role": "teacher", "scope": {} }]
    })
}

fn detail_json() -> serde_json::Value {
    serde_json::json!({
        "id": "l-1",
        "title": "Solar System",
        "subject": "Science",
        "grade_level": "5",
        "language": "en",
        "status": "draft",
        "tags": ["space"],
        "visibility": "private",
        "current_version_id": "v2",
        "updated_at": "2026-03-01T10:00:00+00:00",
        "owner_user_id": "u-1",
        "versions": [{
            "id": "v2",
            "lesson_id": "l-1",
            "version_no": 2,
            "objective": "Compare planets",
            "duration_minutes": 45,
            "teacher_script_md": "### Script",
            "materials": [{ "name": "globe" }],
            "created_at": "2026-03-01T10:00:00+00:00",
            "created_by_user_id": "u-1"
        }]
    })
}

// =============================================================
// User / session
// =============================================================

#[test]
fn session_response_yields_user_only_when_authenticated() {
    let body = serde_json::json!({ "authenticated": true, "user": user_json() });
    let parsed: AuthSessionResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.into_user().map(|u| u.id), Some("u-1".to_owned()));

    let body = serde_json::json!({ "authenticated": false, "user": user_json() });
    let parsed: AuthSessionResponse = serde_json::from_value(body).unwrap();
    assert!(parsed.into_user().is_none());

    let body = serde_json::json!({ "authenticated": false, "user": null });
    let parsed: AuthSessionResponse = serde_json::from_value(body).unwrap();
    assert!(parsed.into_user().is_none());
}

#[test]
fn user_display_name_falls_back_to_email() {
    let mut user: User = serde_json::from_value(user_json()).unwrap();
    assert_eq!(user.display_name(), "Taylor Teacher");
    user.full_name = Some("   ".to_owned());
    assert_eq!(user.display_name(), "taylor@school.org");
    user.full_name = None;
    assert_eq!(user.display_name(), "taylor@school.org");
}

#[test]
fn user_primary_role_defaults_to_teacher() {
    let mut user: User = serde_json::from_value(user_json()).unwrap();
    user.roles[0].role = "admin".to_owned();
    assert_eq!(user.primary_role(), "admin");
    user.roles.clear();
    assert_eq!(user.primary_role(), "teacher");
}

#[test]
fn user_missing_lists_default_to_empty() {
    let mut body = user_json();
    let obj = body.as_object_mut().unwrap();
    obj.remove("preferred_subjects");
    obj.remove("roles");
    let user: User = serde_json::from_value(body).unwrap();
    assert!(user.preferred_subjects.is_empty());
    assert!(user.roles.is_empty());
}

#[test]
fn update_profile_payload_sends_null_full_name_and_omits_missing_locale() {
    let payload = UpdateProfilePayload {
        full_name: None,
        preferred_subjects: vec!["Math".to_owned()],
        preferred_grade_levels: vec![],
        locale: None,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "full_name": null,
            "preferred_subjects": ["Math"],
            "preferred_grade_levels": []
        })
    );
}

// =============================================================
// Lessons
// =============================================================

#[test]
fn lesson_detail_flattens_summary_fields() {
    let detail: LessonDetail = serde_json::from_value(detail_json()).unwrap();
    assert_eq!(detail.summary.title, "Solar System");
    assert_eq!(detail.summary.current_version_id.as_deref(), Some("v2"));
    assert_eq!(detail.owner_user_id, "u-1");
    assert_eq!(detail.versions.len(), 1);
    let version = &detail.versions[0];
    assert_eq!(version.version_no, 2);
    assert_eq!(version.materials.len(), 1);
    assert!(version.flow.is_empty());
    assert!(version.source.is_empty());
}

#[test]
fn lesson_detail_without_versions_defaults_to_empty() {
    let mut body = detail_json();
    body.as_object_mut().unwrap().remove("versions");
    let detail: LessonDetail = serde_json::from_value(body).unwrap();
    assert!(detail.versions.is_empty());
}

#[test]
fn version_payload_sends_only_populated_fields() {
    let payload = CreateLessonVersionPayload {
        objective: Some("Students will...".to_owned()),
        status: Some("draft".to_owned()),
        ..CreateLessonVersionPayload::default()
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "objective": "Students will...", "status": "draft" })
    );
    assert_eq!(
        serde_json::to_value(CreateLessonVersionPayload::default()).unwrap(),
        serde_json::json!({})
    );
}

#[test]
fn create_lesson_payload_omits_absent_optionals() {
    let payload = CreateLessonPayload {
        title: "Fractions".to_owned(),
        subject: "Math".to_owned(),
        grade_level: "4".to_owned(),
        ..CreateLessonPayload::default()
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "title": "Fractions", "subject": "Math", "grade_level": "4" })
    );
}

// =============================================================
// Differentiation / share / export
// =============================================================

#[test]
fn audience_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&DifferentiationAudience::Ell).unwrap(), "\"ELL\"");
    assert_eq!(serde_json::to_string(&DifferentiationAudience::Iep).unwrap(), "\"IEP\"");
    assert_eq!(serde_json::to_string(&DifferentiationAudience::Gifted).unwrap(), "\"GIFTED\"");
}

#[test]
fn audience_parse_accepts_wire_tags_only() {
    for audience in DifferentiationAudience::ALL {
        assert_eq!(DifferentiationAudience::parse(audience.as_str()), Some(audience));
    }
    assert_eq!(DifferentiationAudience::parse("ell"), None);
    assert_eq!(DifferentiationAudience::default(), DifferentiationAudience::Ell);
}

#[test]
fn differentiate_payload_omits_missing_notes() {
    let payload = DifferentiatePayload { audience: DifferentiationAudience::Iep, notes: None };
    assert_eq!(serde_json::to_value(&payload).unwrap(), serde_json::json!({ "audience": "IEP" }));
}

#[test]
fn share_request_without_expiry_is_empty_object() {
    assert_eq!(
        serde_json::to_value(ShareCreateRequest::default()).unwrap(),
        serde_json::json!({})
    );
    let request = ShareCreateRequest { expires_in_hours: Some(72) };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "expires_in_hours": 72 })
    );
}

#[test]
fn export_format_labels_and_binary_flag() {
    assert_eq!(ExportFormat::Pdf.as_str(), "pdf");
    assert_eq!(ExportFormat::Docx.label(), "DOCX");
    assert!(ExportFormat::Pdf.is_binary());
    assert!(ExportFormat::Docx.is_binary());
    assert!(!ExportFormat::Gdoc.is_binary());
}

#[test]
fn classroom_push_request_omits_blank_optionals() {
    let request = ClassroomPushRequest {
        lesson_id: "l-1".to_owned(),
        course_id: "c-9".to_owned(),
        topic_id: None,
        due_date: None,
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "lesson_id": "l-1", "course_id": "c-9" })
    );
}

#[test]
fn analytics_summary_deserializes_counters() {
    let body = serde_json::json!({
        "lessons_created": 8,
        "lessons_generated": 5,
        "lessons_differentiated": 3,
        "exports": 2,
        "lms_pushes": 1,
        "total_lessons": 12,
        "estimated_time_saved_minutes": 150
    });
    let summary: AnalyticsSummary = serde_json::from_value(body).unwrap();
    assert_eq!(summary.lessons_created, 8);
    assert_eq!(summary.estimated_time_saved_minutes, 150);
}
