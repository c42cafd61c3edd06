//! Customers page. Chart content is served by the remote API; this page
//! is a placeholder shell around that boundary.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn CustomersPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__body">
                <h1>"Customers"</h1>
                <p class="page__note">"Retention and segment charts."</p>
            </main>
        </div>
    }
}
