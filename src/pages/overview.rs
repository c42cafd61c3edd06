//! Overview page: headline KPI cards.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::metric_card::MetricCard;

/// Landing page for an authenticated session. Numbers come pre-computed
/// from the remote API; absent data renders as em-dash placeholders.
#[component]
pub fn OverviewPage() -> impl IntoView {
    let summary = LocalResource::new(|| crate::net::api::fetch_dashboard_summary());

    view! {
        <div class="page">
            <Header/>
            <main class="page__body">
                <h1>"Overview"</h1>
                <Suspense fallback=move || view! { <p>"Loading metrics..."</p> }>
                    {move || {
                        summary
                            .get()
                            .map(|data| {
                                let fmt =
                                    |v: Option<String>| v.unwrap_or_else(|| "\u{2014}".to_owned());
                                let (revenue, net, users, ticket) = match data {
                                    Some(s) => (
                                        Some(format!("R$ {:.2}", s.total_revenue)),
                                        Some(format!("R$ {:.2}", s.net_revenue)),
                                        Some(s.total_users.to_string()),
                                        Some(format!("R$ {:.2}", s.average_ticket)),
                                    ),
                                    None => (None, None, None, None),
                                };
                                view! {
                                    <div class="page__cards">
                                        <MetricCard label="Total revenue" value=fmt(revenue)/>
                                        <MetricCard label="Net revenue" value=fmt(net)/>
                                        <MetricCard label="Active users" value=fmt(users)/>
                                        <MetricCard label="Average ticket" value=fmt(ticket)/>
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
