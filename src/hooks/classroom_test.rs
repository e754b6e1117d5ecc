use super::*;

fn push(id: &str) -> ClassroomPush {
    ClassroomPush {
        id: id.to_owned(),
        status: "posted".to_owned(),
        external_assignment_id: None,
        created_at: "2024-03-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn pushes_are_listed_newest_first_per_lesson() {
    let mut cache = QueryCache::default();
    record_push(&mut cache, "l-1", &push("p-1"), 1.0);
    record_push(&mut cache, "l-1", &push("p-2"), 2.0);
    record_push(&mut cache, "l-2", &push("p-3"), 3.0);

    let pushes: Vec<ClassroomPush> = cache.data(&QueryKey::classroom_pushes("l-1")).unwrap_or_default();
    let ids: Vec<&str> = pushes.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["p-2", "p-1"]);
}

#[test]
fn push_does_not_mark_anything_stale() {
    let mut cache = QueryCache::default();
    record_push(&mut cache, "l-1", &push("p-1"), 1.0);
    assert!(!cache.is_stale(&QueryKey::classroom_pushes("l-1")));
    assert!(!cache.should_fetch(&QueryKey::classroom_pushes("l-1"), 1.0));
}

#[test]
fn connection_is_stored() {
    let mut cache = QueryCache::default();
    let connection = ClassroomConnection {
        id: "c-1".to_owned(),
        provider: "google_classroom".to_owned(),
        created_at: "2024-03-01T10:00:00Z".to_owned(),
        expires_at: None,
        profile: None,
    };
    record_connection(&mut cache, &connection, 1.0);
    assert_eq!(cache.data(&QueryKey::classroom_connection()), Some(connection));
}
