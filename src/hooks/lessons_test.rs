use super::*;

fn cache_with(keys: &[QueryKey]) -> QueryCache {
    let mut cache = QueryCache::default();
    for key in keys {
        cache.begin_fetch(key, NO_STALE_TIME);
        cache.resolve_ok(key, serde_json::json!([]), 1.0);
    }
    cache
}

#[test]
fn lesson_change_marks_detail_and_lists_stale() {
    let detail = QueryKey::lesson_detail("l-1");
    let list = QueryKey::lessons(&LessonFilters::default());
    let mut cache = cache_with(&[detail.clone(), list.clone()]);

    invalidate_lesson(&mut cache, "l-1");

    assert!(cache.is_stale(&detail));
    assert!(cache.is_stale(&list));
}

#[test]
fn lesson_change_leaves_unrelated_entries_fresh() {
    let analytics = QueryKey::analytics_summary(30);
    let session = QueryKey::session();
    let mut cache = cache_with(&[analytics.clone(), session.clone()]);

    invalidate_lesson(&mut cache, "l-1");

    assert!(!cache.is_stale(&analytics));
    assert!(!cache.is_stale(&session));
}

#[test]
fn detail_query_is_disabled_without_an_id() {
    assert_eq!(lesson_detail_params(String::new()), None);
    assert_eq!(lesson_detail_params("  ".to_owned()), None);
    assert_eq!(lesson_detail_params("l-1".to_owned()), Some("l-1".to_owned()));
}
