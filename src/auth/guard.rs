//! Route authorization for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::{SessionContext, SessionState};

/// Outcome of evaluating the session state for a protected route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Startup hydration still pending; show a placeholder and decide later.
    Loading,
    /// Credential present; render the protected view.
    Allow,
    /// No session; send the visitor to the login page.
    RedirectToLogin,
}

/// Decide what a protected route should do.
///
/// The loading check comes strictly first: at startup the authentication
/// flag can already be true while the profile is still hydrating, and the
/// guard must not bounce to login during that window just because `user`
/// is momentarily absent.
pub fn decide(state: &SessionState) -> RouteDecision {
    if state.is_loading {
        RouteDecision::Loading
    } else if state.is_authenticated {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToLogin
    }
}

/// Wrapper for routes that require an authenticated session.
///
/// A pure function of the session context; it never reads the credential
/// store or the session service directly.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();

    Effect::new(move || {
        if decide(&session.state().get()) == RouteDecision::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    move || match decide(&session.state().get()) {
        RouteDecision::Loading => {
            view! { <div class="screen-loading">"Loading..."</div> }.into_any()
        }
        RouteDecision::Allow => children().into_any(),
        RouteDecision::RedirectToLogin => ().into_any(),
    }
}
