use super::*;
use crate::net::types::{Role, UserProfile};

fn profile() -> UserProfile {
    UserProfile {
        user_id: "u1".to_owned(),
        display_name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        role: Role::Ceo,
    }
}

// =============================================================
// Loading is checked before authentication
// =============================================================

#[test]
fn hydrating_with_credential_waits_instead_of_allowing_early() {
    // Token present, profile still hydrating: wait, do not flash to login.
    let state = SessionState {
        user: None,
        is_authenticated: true,
        is_loading: true,
    };
    assert_eq!(decide(&state), RouteDecision::Loading);
}

#[test]
fn hydrating_without_credential_still_waits() {
    let state = SessionState {
        user: None,
        is_authenticated: false,
        is_loading: true,
    };
    assert_eq!(decide(&state), RouteDecision::Loading);
}

// =============================================================
// Settled states
// =============================================================

#[test]
fn settled_authenticated_allows() {
    let state = SessionState {
        user: Some(profile()),
        is_authenticated: true,
        is_loading: false,
    };
    assert_eq!(decide(&state), RouteDecision::Allow);
}

#[test]
fn settled_unauthenticated_redirects() {
    let state = SessionState {
        user: None,
        is_authenticated: false,
        is_loading: false,
    };
    assert_eq!(decide(&state), RouteDecision::RedirectToLogin);
}

#[test]
fn full_startup_sequence_never_redirects_with_credential() {
    // Store has a token: Loading during hydration, Allow after, at no
    // point RedirectToLogin.
    let mut state = SessionState::initial(true);
    assert_eq!(decide(&state), RouteDecision::Loading);
    state.apply(crate::auth::session::Transition::Hydrated(Some(profile())));
    assert_eq!(decide(&state), RouteDecision::Allow);
}
