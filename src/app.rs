//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::guard::Protected;
use crate::auth::session::SessionContext;
use crate::pages::{
    customers::CustomersPage, finance::FinancePage, login::LoginPage, not_found::NotFoundPage,
    overview::OverviewPage, profile::ProfilePage, register::RegisterPage, stores::StoresPage,
};
use crate::util::theme::Theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the one session context for this tab, applies the persisted
/// theme, and sets up client-side routing. Protected routes are wrapped in
/// [`Protected`]; login and register stay public.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let _session = SessionContext::provide();
    Theme::load().apply();

    view! {
        <Stylesheet id="leptos" href="/pkg/picboard-ui.css"/>
        <Title text="PicBoard"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><OverviewPage/></Protected> }
                />
                <Route
                    path=StaticSegment("finance")
                    view=|| view! { <Protected><FinancePage/></Protected> }
                />
                <Route
                    path=StaticSegment("customers")
                    view=|| view! { <Protected><CustomersPage/></Protected> }
                />
                <Route
                    path=StaticSegment("stores")
                    view=|| view! { <Protected><StoresPage/></Protected> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Protected><ProfilePage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
