use super::*;

// =============================================================
// Role parsing and normalization
// =============================================================

#[test]
fn role_parse_known_values() {
    assert_eq!(Role::parse("CEO"), Some(Role::Ceo));
    assert_eq!(Role::parse("CFO"), Some(Role::Cfo));
    assert_eq!(Role::parse("USER"), Some(Role::User));
}

#[test]
fn role_parse_rejects_unknown_and_lowercase() {
    assert_eq!(Role::parse("ceo"), None);
    assert_eq!(Role::parse("ADMIN"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_normalize_unknown_collapses_to_user() {
    assert_eq!(Role::normalize(Some("ADMIN")), Role::User);
    assert_eq!(Role::normalize(None), Role::User);
    assert_eq!(Role::normalize(Some("CFO")), Role::Cfo);
}

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn user_profile_serde_camel_case_round_trip() {
    let profile = UserProfile {
        user_id: "u1".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Ceo,
    };
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"userId\":\"u1\""));
    assert!(json.contains("\"displayName\":\"Ada\""));
    assert!(json.contains("\"role\":\"CEO\""));
    let back: UserProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn user_profile_rejects_unknown_role_string() {
    let json = r#"{"userId":"u1","displayName":"Ada","email":"a@b.c","role":"ADMIN"}"#;
    assert!(serde_json::from_str::<UserProfile>(json).is_err());
}

#[test]
fn login_response_into_pair_normalizes_role() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"token":"abc","userId":"u1","displayName":"Ada","email":"a@b.c","role":"SOMETHING"}"#,
    )
    .unwrap();
    let (token, profile) = resp.into_pair();
    assert_eq!(token, "abc");
    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.role, Role::User);
}

#[test]
fn login_response_tolerates_missing_role() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"token":"abc","userId":"u1","displayName":"Ada","email":"a@b.c"}"#,
    )
    .unwrap();
    let (_, profile) = resp.into_pair();
    assert_eq!(profile.role, Role::User);
}

#[test]
fn profile_update_request_skips_absent_fields() {
    let body = ProfileUpdateRequest { display_name: None };
    assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    let body = ProfileUpdateRequest {
        display_name: Some("New Name"),
    };
    assert_eq!(
        serde_json::to_string(&body).unwrap(),
        r#"{"displayName":"New Name"}"#
    );
}
