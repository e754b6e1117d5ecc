use super::*;

fn user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "teacher@example.com",
        "full_name": "Ada Teacher",
        "avatar_url": null,
        "locale": "en-US",
        "is_active": true,
        "is_superuser": false
    }))
    .unwrap()
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(state.is_loading());
    assert!(state.user.is_none());
}

#[test]
fn loading_query_is_loading() {
    assert_eq!(AuthState::from_query(QueryState::Loading).status, SessionStatus::Loading);
    assert_eq!(AuthState::from_query(QueryState::Disabled).status, SessionStatus::Loading);
}

#[test]
fn failed_check_is_unauthenticated() {
    let state = AuthState::from_query(QueryState::Failed("request failed with status 500".to_owned()));
    assert_eq!(state, AuthState::signed_out());
}

#[test]
fn resolved_without_user_is_unauthenticated() {
    let state = AuthState::from_query(QueryState::Ready(None));
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(!state.is_authenticated());
}

#[test]
fn resolved_user_is_authenticated() {
    let state = AuthState::from_query(QueryState::Ready(Some(user())));
    assert!(state.is_authenticated());
    assert_eq!(state.user.map(|u| u.email), Some("teacher@example.com".to_owned()));
}
