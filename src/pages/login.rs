//! Login page: identifier + password form submitted through the session
//! context.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::auth::session::SessionContext;

/// Login form. The identifier may be a user id or an email. On success the
/// visitor lands on the overview; on failure the error reason is shown
/// inline and any prior session is untouched.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::expect();
    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
                let id = identifier.get_untracked();
                let pw = password.get_untracked();
                let result = session.login(id.trim(), &pw).await;
                busy.set(false);
                match result {
                    Ok(()) => navigate(
                        "/",
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
                <h1>"PicBoard"</h1>
                <p class="login-page__subtitle">"Corporate analytics"</p>

                <form class="login-page__form" on:submit=on_submit>
                    <label class="field">
                        "Email or user id"
                        <input
                            type="text"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
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

                    {move || {
                        error.get().map(|msg| view! { <p class="form-error">{msg}</p> })
                    }}

                    <button class="btn btn--primary" type="submit" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="login-page__footer">
                    "No account? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
