//! Top navigation bar with identity display, theme toggle, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth::session::SessionContext;
use crate::util::theme::Theme;

/// App header shown on every protected page.
///
/// The identity block reads the session context only; logging out goes
/// through the context so every subscriber sees the change at once.
#[component]
pub fn Header() -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();
    let theme = RwSignal::new(Theme::load());

    let on_logout = move |_| {
        session.logout();
        navigate(
            "/login",
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"PicBoard"</a>
            <nav class="app-header__nav">
                <a href="/">"Overview"</a>
                <a href="/finance">"Finance"</a>
                <a href="/customers">"Customers"</a>
                <a href="/stores">"Stores"</a>
            </nav>
            <div class="app-header__actions">
                <button
                    class="app-header__theme"
                    title="Toggle theme"
                    on:click=move |_| {
                        let next = theme.get_untracked().flip();
                        next.apply();
                        next.store();
                        theme.set(next);
                    }
                >
                    {move || theme.get().flip().name()}
                </button>
                {move || {
                    session
                        .state()
                        .get()
                        .user
                        .map(|u| {
                            view! {
                                <a class="app-header__identity" href="/profile">
                                    <span class="app-header__name">{u.display_name}</span>
                                    <span class="app-header__role">{u.role.as_str()}</span>
                                </a>
                            }
                        })
                }}
                <button class="btn" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </header>
    }
}
