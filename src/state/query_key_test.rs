use super::*;

fn science() -> LessonFilters {
    LessonFilters {
        subject: Some("Science".to_owned()),
        ..LessonFilters::default()
    }
}

#[test]
fn unfiltered_list_key_uses_empty_object() {
    let key = QueryKey::lessons(&LessonFilters::default());
    assert_eq!(key.segments(), ["lessons", "list", "{}"]);
}

#[test]
fn filtered_list_key_differs_from_unfiltered() {
    let filtered = QueryKey::lessons(&science());
    let unfiltered = QueryKey::lessons(&LessonFilters::default());
    assert_ne!(filtered, unfiltered);
    assert_eq!(filtered.segments()[2], r#"{"subject":"Science"}"#);
}

#[test]
fn equal_filters_produce_equal_keys() {
    assert_eq!(QueryKey::lessons(&science()), QueryKey::lessons(&science()));
}

#[test]
fn tag_order_is_part_of_the_key() {
    let a = LessonFilters { tags: vec!["a".to_owned(), "b".to_owned()], ..LessonFilters::default() };
    let b = LessonFilters { tags: vec!["b".to_owned(), "a".to_owned()], ..LessonFilters::default() };
    assert_ne!(QueryKey::lessons(&a), QueryKey::lessons(&b));
}

#[test]
fn lessons_family_prefixes_list_and_detail_keys() {
    let family = QueryKey::lessons_family();
    assert!(QueryKey::lessons(&science()).starts_with(&family));
    assert!(QueryKey::lessons(&LessonFilters::default()).starts_with(&family));
    assert!(QueryKey::lesson_detail("l-1").starts_with(&family));
    assert!(!QueryKey::session().starts_with(&family));
    assert!(!QueryKey::analytics_summary(30).starts_with(&family));
}

#[test]
fn detail_key_does_not_prefix_other_lessons() {
    let detail = QueryKey::lesson_detail("l-1");
    assert!(!QueryKey::lesson_detail("l-2").starts_with(&detail));
    assert!(detail.starts_with(&detail));
}

#[test]
fn analytics_and_classroom_keys() {
    assert_eq!(QueryKey::analytics_summary(7).segments(), ["analytics", "summary", "7"]);
    assert_ne!(QueryKey::analytics_summary(7), QueryKey::analytics_summary(30));
    assert_eq!(QueryKey::classroom_connection().segments(), ["lms", "classroom", "connection"]);
    assert_eq!(QueryKey::classroom_pushes("l-1").segments(), ["lms", "classroom", "pushes", "l-1"]);
}

#[test]
fn display_joins_segments() {
    assert_eq!(QueryKey::session().to_string(), "[auth, session]");
}
