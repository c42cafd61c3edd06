//! Profile page: identity display and display-name editing.
//!
//! The rename is write-then-reconcile: when the write commits but the
//! canonical re-fetch fails, the page surfaces that distinctly and offers
//! a refresh retry that does not repeat the write.

use leptos::prelude::*;

use crate::auth::error::AuthError;
use crate::auth::session::SessionContext;
use crate::components::header::Header;

/// Outcome banner shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Saved,
    /// Rename committed but the snapshot is stale; retry is offered.
    NeedsRefresh(String),
    Failed(String),
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = SessionContext::expect();
    let name = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);

    // Seed the edit field once the hydrated profile is available.
    Effect::new(move || {
        if let Some(user) = session.state().get().user {
            if name.get_untracked().is_empty() {
                name.set(user.display_name);
            }
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            notice.set(None);
            leptos::task::spawn_local(async move {
                let new_name = name.get_untracked();
                let result = session.update_display_name(new_name.trim()).await;
                busy.set(false);
                notice.set(Some(match result {
                    Ok(()) => Notice::Saved,
                    Err(err @ AuthError::StaleProfile(_)) => {
                        Notice::NeedsRefresh(err.user_message())
                    }
                    Err(err) => Notice::Failed(err.user_message()),
                }));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    let on_retry_refresh = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                notice.set(match session.retry_profile_refresh().await {
                    Ok(()) => Some(Notice::Saved),
                    Err(err) => Some(Notice::NeedsRefresh(err.user_message())),
                });
            });
        }
    };

    view! {
        <div class="page">
            <Header/>
            <main class="page__body">
                <h1>"Profile"</h1>

                {move || {
                    session
                        .state()
                        .get()
                        .user
                        .map(|u| {
                            view! {
                                <dl class="profile__identity">
                                    <dt>"User id"</dt>
                                    <dd>{u.user_id}</dd>
                                    <dt>"Email"</dt>
                                    <dd>{u.email}</dd>
                                    <dt>"Role"</dt>
                                    <dd>{u.role.as_str()}</dd>
                                </dl>
                            }
                        })
                }}

                <form class="profile__form" on:submit=on_save>
                    <label class="field">
                        "Display name"
                        <input
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            prop:disabled=move || busy.get()
                            required
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </form>

                {move || {
                    notice
                        .get()
                        .map(|n| match n {
                            Notice::Saved => {
                                view! { <p class="form-ok">"Profile updated."</p> }.into_any()
                            }
                            Notice::NeedsRefresh(msg) => {
                                view! {
                                    <p class="form-warn">
                                        {msg} " "
                                        <button class="btn" on:click=on_retry_refresh>
                                            "Retry refresh"
                                        </button>
                                    </p>
                                }
                                    .into_any()
                            }
                            Notice::Failed(msg) => {
                                view! { <p class="form-error">{msg}</p> }.into_any()
                            }
                        })
                }}
            </main>
        </div>
    }
}
