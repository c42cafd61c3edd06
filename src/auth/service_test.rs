use super::*;

// =============================================================
// Status-to-reason mapping
// =============================================================

#[test]
fn login_failure_unauthorized_is_invalid_credentials() {
    assert_eq!(login_failure(401, None), AuthError::InvalidCredentials);
    assert_eq!(
        login_failure(403, Some("nope".to_owned())),
        AuthError::InvalidCredentials
    );
}

#[test]
fn login_failure_other_statuses_are_server_errors() {
    assert!(matches!(login_failure(500, None), AuthError::Server(_)));
    assert!(matches!(login_failure(418, None), AuthError::Server(_)));
}

#[test]
fn login_failure_prefers_server_message() {
    assert_eq!(
        login_failure(500, Some("db down".to_owned())),
        AuthError::Server("db down".to_owned())
    );
}

#[test]
fn register_failure_conflict_is_duplicate() {
    assert_eq!(register_failure(409, None), AuthError::DuplicateIdentifier);
}

#[test]
fn register_failure_bad_request_is_validation() {
    assert!(matches!(
        register_failure(400, None),
        AuthError::Validation(_)
    ));
    assert_eq!(
        register_failure(422, Some("email malformed".to_owned())),
        AuthError::Validation("email malformed".to_owned())
    );
}

#[test]
fn register_failure_other_statuses_are_server_errors() {
    assert!(matches!(register_failure(503, None), AuthError::Server(_)));
}

#[test]
fn profile_failure_maps_validation_and_server() {
    assert!(matches!(
        profile_failure(422, None),
        AuthError::Validation(_)
    ));
    assert!(matches!(profile_failure(500, None), AuthError::Server(_)));
}

// =============================================================
// Synchronous reads never touch the network and see the store
// =============================================================

#[test]
fn current_user_absent_without_store() {
    assert!(current_user().is_none());
    assert!(!has_credential());
}
