//! KPI metric card.

use leptos::prelude::*;

/// Single headline-number card. Values arrive pre-formatted; no numeric
/// computation happens client-side.
#[component]
pub fn MetricCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="metric-card">
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{value}</span>
        </div>
    }
}
