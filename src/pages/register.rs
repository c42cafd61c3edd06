//! Registration page.
//!
//! Registration never establishes a session: on success the visitor is
//! sent to the login page to sign in with the new account.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::auth::session::SessionContext;
use crate::net::types::Role;

/// Account creation form with a role selector (CEO / CFO / USER).
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = SessionContext::expect();
    let user_id = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::User.as_str().to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            error.set(None);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let selected = Role::parse(&role.get_untracked()).unwrap_or_default();
                let result = session
                    .register(
                        user_id.get_untracked().trim(),
                        display_name.get_untracked().trim(),
                        email.get_untracked().trim(),
                        &password.get_untracked(),
                        selected,
                    )
                    .await;
                busy.set(false);
                match result {
                    Ok(()) => navigate(
                        "/login",
                        NavigateOptions {
                            replace: true,
                            ..Default::default()
                        },
                    ),
                    Err(err) => error.set(Some(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Create account"</h1>

                <form class="login-page__form" on:submit=on_submit>
                    <label class="field">
                        "User id"
                        <input
                            type="text"
                            prop:value=move || user_id.get()
                            on:input=move |ev| user_id.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                            required
                        />
                    </label>
                    <label class="field">
                        "Name"
                        <input
                            type="text"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                            required
                        />
                    </label>
                    <label class="field">
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                            required
                        />
                    </label>
                    <label class="field">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                            required
                        />
                    </label>
                    <label class="field">
                        "Role"
                        <select
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                        >
                            <option value="USER">"User"</option>
                            <option value="CEO">"CEO"</option>
                            <option value="CFO">"CFO"</option>
                        </select>
                    </label>

                    {move || {
                        error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>

                <p class="login-page__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
