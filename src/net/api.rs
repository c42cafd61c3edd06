//! REST helpers for the non-auth API surface.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, bearer-authorized
//! from the stored credential. Outside the browser these return `None` and
//! the pages degrade to empty placeholders.
//!
//! All KPI computation is owned by the remote API; nothing here aggregates
//! or post-processes the numbers.

#![allow(clippy::unused_async)]

use crate::net::types::DashboardSummary;

/// Fetch the headline KPI numbers from `/api/kpis/summary`.
///
/// Returns `None` when unauthenticated, on transport failure, or outside
/// the browser; the overview page renders empty cards in that case.
pub async fn fetch_dashboard_summary() -> Option<DashboardSummary> {
    #[cfg(feature = "hydrate")]
    {
        let token = crate::auth::store::token()?;
        let resp = gloo_net::http::Request::get("/api/kpis/summary")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<DashboardSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
