//! Single dashboard metric.

use leptos::prelude::*;

/// A labelled value; `None` renders a loading placeholder.
#[component]
pub fn MetricCard(label: &'static str, #[prop(into)] value: Signal<Option<String>>) -> impl IntoView {
    view! {
        <div class="metric-card" class:metric-card--loading=move || value.get().is_none()>
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{move || value.get().unwrap_or_else(|| "—".to_owned())}</span>
        </div>
    }
}
