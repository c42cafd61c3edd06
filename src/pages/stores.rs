//! Stores page. Chart content is served by the remote API; this page is a
//! placeholder shell around that boundary.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn StoresPage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__body">
                <h1>"Stores"</h1>
                <p class="page__note">"Top partner stores and zone breakdown."</p>
            </main>
        </div>
    }
}
