//! Catch-all 404 page.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <main class="page__body">
                <h1>"404"</h1>
                <p>"Page not found. " <a href="/">"Back to the dashboard"</a></p>
            </main>
        </div>
    }
}
