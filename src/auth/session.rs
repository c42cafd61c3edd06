//! Session context: the single subscribable source of session state for
//! the whole view tree.
//!
//! The state machine itself ([`SessionState`] + [`Transition`]) is plain
//! data so it can be unit-tested natively; [`SessionContext`] wraps it in a
//! signal and serializes mutating operations with a generation counter so a
//! slow response from a superseded operation can never clobber newer state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::auth::error::AuthError;
use crate::auth::service;
use crate::net::types::{Role, UserProfile};

/// Transient, in-memory session view.
///
/// Recomputed from the credential store on every startup; never persisted
/// directly. `is_authenticated` reflects credential *presence*, not the
/// freshness of `user` — a credential can exist while the profile is still
/// hydrating.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl SessionState {
    /// Startup state. Authentication is known synchronously from credential
    /// presence; the profile read is still pending.
    pub fn initial(has_credential: bool) -> Self {
        Self {
            user: None,
            is_authenticated: has_credential,
            is_loading: true,
        }
    }

    /// Apply a lifecycle transition.
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Hydrated(user) => {
                self.user = user;
                self.is_loading = false;
            }
            Transition::LoggedIn(profile) => {
                // Observers must never see the flag and the profile
                // disagree after a completed login, so both change in one
                // update.
                self.user = Some(profile);
                self.is_authenticated = true;
            }
            Transition::LoggedOut => {
                self.user = None;
                self.is_authenticated = false;
            }
            Transition::Refreshed(user) => {
                // Leaves the authentication flag alone.
                self.user = user;
            }
        }
    }
}

/// Session lifecycle transitions.
#[derive(Clone, Debug)]
pub enum Transition {
    /// The one-shot startup read of the stored profile resolved.
    Hydrated(Option<UserProfile>),
    /// A login completed; the server returned this profile.
    LoggedIn(UserProfile),
    /// Logout completed. Re-enterable via a new login.
    LoggedOut,
    /// An explicit re-read of the stored profile, used after updates.
    Refreshed(Option<UserProfile>),
}

/// Ticket handed to a mutating operation at initiation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

/// Monotonic counter serializing mutating session operations per tab.
///
/// A completion is applied only while its ticket is still current, so
/// last-write-wins follows initiation order, not completion order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Generations {
    current: u64,
}

impl Generations {
    /// Start a new operation, superseding all earlier tickets.
    pub fn begin(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn is_current(&self, ticket: Generation) -> bool {
        ticket.0 == self.current
    }
}

/// Shared session context, one instance per running tab.
///
/// Constructed explicitly by the root component and handed to the view
/// tree via Leptos context rather than living in a global; tests build a
/// fresh [`SessionState`] machine directly instead.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    generations: StoredValue<Generations>,
    hydrated: StoredValue<bool>,
}

impl SessionContext {
    /// Construct a fresh context, register it with the reactive tree, and
    /// schedule the one-shot startup hydration.
    pub fn provide() -> Self {
        let ctx = Self {
            state: RwSignal::new(SessionState::initial(service::has_credential())),
            generations: StoredValue::new(Generations::default()),
            hydrated: StoredValue::new(false),
        };
        provide_context(ctx);
        ctx.schedule_hydration();
        ctx
    }

    /// Retrieve the context provided by the root component.
    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    /// Read handle for the current session state.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// One-shot startup read of the stored profile. The effect only runs in
    /// the browser; the flag keeps re-renders from re-running it.
    fn schedule_hydration(self) {
        Effect::new(move || {
            if self.hydrated.get_value() {
                return;
            }
            self.hydrated.set_value(true);
            let user = service::current_user();
            self.state.update(|s| s.apply(Transition::Hydrated(user)));
        });
    }

    fn begin_op(&self) -> Generation {
        self.generations
            .try_update_value(Generations::begin)
            .unwrap_or_default()
    }

    fn is_current(&self, ticket: Generation) -> bool {
        self.generations.with_value(|g| g.is_current(ticket))
    }

    /// Log in and update the shared state, profile and flag together.
    ///
    /// The currency check happens before the persistent commit: a
    /// completion that lost the race to a newer operation is discarded
    /// without writing the store, so a superseded login can never
    /// resurrect a session that a later logout cleared.
    ///
    /// # Errors
    ///
    /// Propagates the service error; the shared state is untouched on
    /// failure and `is_loading` never flips. A discarded completion is
    /// reported as `Stale`.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<(), AuthError> {
        let ticket = self.begin_op();
        let (token, profile) = service::authenticate(identifier, password).await?;
        if !self.is_current(ticket) {
            log::debug!("discarding login completion superseded by a newer operation");
            return Err(AuthError::Stale);
        }
        service::commit_login(&token, &profile);
        self.state.update(|s| s.apply(Transition::LoggedIn(profile)));
        Ok(())
    }

    /// Pass-through to account registration. Never establishes a session,
    /// so the shared state is untouched.
    ///
    /// # Errors
    ///
    /// Propagates the service error.
    pub async fn register(
        &self,
        user_id: &str,
        display_name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), AuthError> {
        service::register(user_id, display_name, email, password, role).await
    }

    /// Log out. Infallible; clearing local state is authoritative.
    pub fn logout(&self) {
        // Bumping the generation invalidates any in-flight completion.
        self.begin_op();
        service::logout();
        self.state.update(|s| s.apply(Transition::LoggedOut));
    }

    /// Re-read the stored profile snapshot into the shared state without
    /// touching the authentication flag.
    pub fn refresh_user(&self) {
        self.state
            .update(|s| s.apply(Transition::Refreshed(service::current_user())));
    }

    /// Rename the account, reconcile the stored snapshot, and refresh the
    /// shared view.
    ///
    /// # Errors
    ///
    /// `StaleProfile` means the rename committed but the snapshot is stale;
    /// the caller may retry with [`Self::retry_profile_refresh`] without
    /// repeating the write.
    pub async fn update_display_name(&self, display_name: &str) -> Result<(), AuthError> {
        let ticket = self.begin_op();
        let result = service::update_profile(display_name).await;
        if self.is_current(ticket) {
            self.refresh_user();
        }
        result.map(|_profile| ())
    }

    /// Retry the canonical profile re-fetch after a `StaleProfile` outcome.
    ///
    /// # Errors
    ///
    /// Propagates the service error; the stored snapshot and shared state
    /// keep their previous values on failure.
    pub async fn retry_profile_refresh(&self) -> Result<(), AuthError> {
        let ticket = self.begin_op();
        service::refresh_profile().await?;
        if self.is_current(ticket) {
            self.refresh_user();
        }
        Ok(())
    }
}
