//! Finance page. Chart content is served by the remote API; this page is
//! a placeholder shell around that boundary.

use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn FinancePage() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <main class="page__body">
                <h1>"Finance"</h1>
                <p class="page__note">"Revenue and margin charts."</p>
            </main>
        </div>
    }
}
