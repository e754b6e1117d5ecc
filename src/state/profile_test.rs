use super::*;

fn user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "teacher@example.com",
        "full_name": "Ada Teacher",
        "avatar_url": null,
        "locale": "fr-CA",
        "preferred_subjects": ["Science", "Math"],
        "preferred_grade_levels": ["5"],
        "is_active": true,
        "is_superuser": false,
        "roles": [{ "role": "admin" }]
    }))
    .unwrap()
}

#[test]
fn parse_list_trims_and_drops_empty_entries() {
    assert_eq!(parse_list(" Science , ,Math,"), ["Science", "Math"]);
    assert!(parse_list("").is_empty());
}

#[test]
fn to_input_string_joins_with_comma_space() {
    assert_eq!(to_input_string(&["a".to_owned(), "b".to_owned()]), "a, b");
}

#[test]
fn form_prefills_from_user() {
    let form = ProfileForm::from_user(Some(&user()));
    assert_eq!(form.full_name, "Ada Teacher");
    assert_eq!(form.subjects, "Science, Math");
    assert_eq!(form.grades, "5");
    assert_eq!(ProfileForm::from_user(None), ProfileForm::default());
}

#[test]
fn blank_name_is_sent_as_null_with_user_locale() {
    let form = ProfileForm {
        full_name: "  ".to_owned(),
        subjects: "Science, History".to_owned(),
        grades: String::new(),
    };
    let body = serde_json::to_value(form.to_payload(Some(&user()))).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "full_name": null,
            "preferred_subjects": ["Science", "History"],
            "preferred_grade_levels": [],
            "locale": "fr-CA"
        })
    );
}

#[test]
fn locale_falls_back_to_en_us() {
    assert_eq!(user_locale(None), "en-US");
    assert_eq!(ProfileForm::default().to_payload(None).locale.as_deref(), Some("en-US"));
}
