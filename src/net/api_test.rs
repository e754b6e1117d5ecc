use super::*;

#[test]
fn lesson_paths_format_expected_routes() {
    assert_eq!(lesson_path("l-1"), "/lessons/l-1");
    assert_eq!(lesson_versions_path("l-1"), "/lessons/l-1/versions");
    assert_eq!(lesson_restore_path("l-1", 3), "/lessons/l-1/restore/3");
    assert_eq!(lesson_export_path("l-1"), "/lessons/l-1/export");
    assert_eq!(lesson_differentiate_path("l-1"), "/lessons/l-1/differentiate");
    assert_eq!(lesson_share_path("l-1"), "/lessons/l-1/share");
}

#[test]
fn empty_filters_send_no_query() {
    let filters = LessonFilters::default();
    assert!(filters.is_empty());
    assert!(filters.query_pairs().is_empty());
}

#[test]
fn filters_repeat_tags_and_skip_absent_fields() {
    let filters = LessonFilters {
        subject: Some("Science".to_owned()),
        grade_level: None,
        tags: vec!["space".to_owned(), "planets".to_owned()],
    };
    assert!(!filters.is_empty());
    assert_eq!(
        filters.query_pairs(),
        vec![
            ("subject", "Science".to_owned()),
            ("tags", "space".to_owned()),
            ("tags", "planets".to_owned()),
        ]
    );
}

#[test]
fn export_and_analytics_queries() {
    assert_eq!(export_query(ExportFormat::Docx), vec![("format", "docx".to_owned())]);
    assert_eq!(export_query(ExportFormat::Gdoc), vec![("format", "gdoc".to_owned())]);
    assert_eq!(analytics_query(30), vec![("days", "30".to_owned())]);
}

#[test]
fn classroom_connect_request_uses_placeholder_tokens() {
    let body = serde_json::to_value(classroom_connect_request()).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "access_token": "stub-access-token",
            "refresh_token": "stub-refresh-token",
            "expires_in": 3600,
            "profile": { "teacher": "You" }
        })
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn resource_calls_are_unavailable_off_browser() {
    let result = block_on(fetch_session());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Minimal executor for futures that complete without waking.
#[cfg(not(feature = "csr"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
