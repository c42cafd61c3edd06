use super::*;
use crate::net::types::Role;

fn profile_json() -> String {
    r#"{"userId":"u1","displayName":"Ada","email":"ada@example.com","role":"CEO"}"#.to_owned()
}

// =============================================================
// decode_pair: both halves or neither
// =============================================================

#[test]
fn decode_pair_valid_pair() {
    let (token, profile) = decode_pair(Some("abc".to_owned()), Some(profile_json())).unwrap();
    assert_eq!(token, "abc");
    assert_eq!(profile.user_id, "u1");
    assert_eq!(profile.role, Role::Ceo);
}

#[test]
fn decode_pair_missing_token_is_absent() {
    assert!(decode_pair(None, Some(profile_json())).is_none());
}

#[test]
fn decode_pair_empty_token_is_absent() {
    assert!(decode_pair(Some(String::new()), Some(profile_json())).is_none());
}

#[test]
fn decode_pair_missing_profile_is_absent() {
    assert!(decode_pair(Some("abc".to_owned()), None).is_none());
}

#[test]
fn decode_pair_malformed_profile_is_absent() {
    assert!(decode_pair(Some("abc".to_owned()), Some("not json".to_owned())).is_none());
}

#[test]
fn decode_pair_unknown_persisted_role_is_absent() {
    let json = r#"{"userId":"u1","displayName":"Ada","email":"a@b.c","role":"ADMIN"}"#;
    assert!(decode_pair(Some("abc".to_owned()), Some(json.to_owned())).is_none());
}

// =============================================================
// Non-browser store is empty
// =============================================================

#[test]
fn native_store_is_always_absent() {
    // Unit tests run without the hydrate feature, where no storage exists.
    assert!(load().is_none());
    assert!(!has_token());
    assert!(token().is_none());
}
