use super::*;
use crate::net::types::Role;

fn profile(user_id: &str, display_name: &str) -> UserProfile {
    UserProfile {
        user_id: user_id.to_owned(),
        display_name: display_name.to_owned(),
        email: format!("{user_id}@example.com"),
        role: Role::Ceo,
    }
}

// =============================================================
// Startup and hydration
// =============================================================

#[test]
fn initial_empty_store_is_unauthenticated_and_loading() {
    let state = SessionState::initial(false);
    assert!(!state.is_authenticated);
    assert!(state.is_loading);
    assert!(state.user.is_none());
}

#[test]
fn initial_with_credential_is_authenticated_before_hydration() {
    // The flag reflects credential presence synchronously, independent of
    // whether the profile has been read yet.
    let state = SessionState::initial(true);
    assert!(state.is_authenticated);
    assert!(state.is_loading);
    assert!(state.user.is_none());
}

#[test]
fn hydration_resolves_user_and_stops_loading() {
    let mut state = SessionState::initial(true);
    state.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    assert!(!state.is_loading);
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().user_id, "u1");
}

#[test]
fn hydration_with_empty_store_still_stops_loading() {
    let mut state = SessionState::initial(false);
    state.apply(Transition::Hydrated(None));
    assert!(!state.is_loading);
    assert!(state.user.is_none());
}

#[test]
fn hydration_is_idempotent() {
    let mut state = SessionState::initial(true);
    state.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    let once = state.clone();
    state.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    assert_eq!(state, once);
}

// =============================================================
// Login, logout, refresh
// =============================================================

#[test]
fn login_sets_user_and_flag_together() {
    let mut state = SessionState::initial(false);
    state.apply(Transition::Hydrated(None));
    state.apply(Transition::LoggedIn(profile("u1", "Ada")));
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().user_id, "u1");
}

#[test]
fn logout_clears_user_and_flag() {
    let mut state = SessionState::initial(true);
    state.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    state.apply(Transition::LoggedOut);
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut once = SessionState::initial(true);
    once.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    once.apply(Transition::LoggedOut);

    let mut twice = once.clone();
    twice.apply(Transition::LoggedOut);
    assert_eq!(once, twice);
}

#[test]
fn refresh_replaces_user_without_touching_flag() {
    let mut state = SessionState::initial(true);
    state.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    state.apply(Transition::Refreshed(Some(profile("u1", "Ada Lovelace"))));
    assert!(state.is_authenticated);
    assert_eq!(state.user.as_ref().unwrap().display_name, "Ada Lovelace");
}

#[test]
fn restart_from_same_store_rederives_same_state() {
    // Hydrating twice from scratch with identical store contents must be
    // indistinguishable; there is no dependency on prior in-memory state.
    let mut first = SessionState::initial(true);
    first.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));

    let mut second = SessionState::initial(true);
    second.apply(Transition::Hydrated(Some(profile("u1", "Ada"))));
    assert_eq!(first, second);
}

// =============================================================
// Generation counter: initiation order wins
// =============================================================

#[test]
fn newer_operation_supersedes_older_ticket() {
    let mut generations = Generations::default();
    let slow_login = generations.begin();
    let logout = generations.begin();
    assert!(!generations.is_current(slow_login));
    assert!(generations.is_current(logout));
}

#[test]
fn stale_login_completion_cannot_clobber_logout() {
    let mut generations = Generations::default();
    let mut state = SessionState::initial(false);
    state.apply(Transition::Hydrated(None));

    // Login initiated, then logout initiated and completed first.
    let login_ticket = generations.begin();
    generations.begin();
    state.apply(Transition::LoggedOut);

    // The slow login response arrives last and must be discarded.
    if generations.is_current(login_ticket) {
        state.apply(Transition::LoggedIn(profile("u1", "Ada")));
    }
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}

#[test]
fn current_ticket_applies_normally() {
    let mut generations = Generations::default();
    let ticket = generations.begin();
    assert!(generations.is_current(ticket));
}

#[test]
fn stale_login_does_not_resurrect_cleared_credentials() {
    // The persistent commit is gated on the same currency check as the
    // state update: after a later logout clears the store, a slow login
    // response must leave both the pair and the state untouched.
    let mut generations = Generations::default();
    let mut state = SessionState::initial(false);
    state.apply(Transition::Hydrated(None));
    let mut stored: Option<UserProfile> = None;

    let login_ticket = generations.begin();
    generations.begin();
    state.apply(Transition::LoggedOut);

    // Slow login response arrives after the logout.
    if generations.is_current(login_ticket) {
        stored = Some(profile("u1", "Ada"));
        state.apply(Transition::LoggedIn(profile("u1", "Ada")));
    }

    assert!(stored.is_none());
    assert!(!state.is_authenticated);
    assert!(state.user.is_none());
}
