//! Dashboard page: analytics summary over a selectable window.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::hooks::analytics::use_analytics_summary;
use crate::net::types::AnalyticsSummary;
use crate::util::format::{ANALYTICS_WINDOWS, DEFAULT_ANALYTICS_DAYS, format_count, format_minutes};

pub const ANALYTICS_ERROR: &str = "Unable to load analytics right now.";

/// Card labels in display order.
pub const METRIC_LABELS: [&str; 7] = [
    "Lessons created",
    "Generated",
    "Differentiated",
    "Exports",
    "LMS pushes",
    "Total lessons",
    "Time saved",
];

/// Formatted values matching [`METRIC_LABELS`].
pub fn metric_values(summary: &AnalyticsSummary) -> [String; 7] {
    [
        format_count(summary.lessons_created),
        format_count(summary.lessons_generated),
        format_count(summary.lessons_differentiated),
        format_count(summary.exports),
        format_count(summary.lms_pushes),
        format_count(summary.total_lessons),
        format_minutes(summary.estimated_time_saved_minutes),
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let days = RwSignal::new(DEFAULT_ANALYTICS_DAYS);
    let summary = use_analytics_summary(move || days.get());

    view! {
        <section class="dashboard-page">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <div class="window-picker" role="group" aria-label="Reporting window">
                    {ANALYTICS_WINDOWS
                        .into_iter()
                        .map(|window| {
                            view! {
                                <button
                                    type="button"
                                    class="window-picker__option"
                                    class:window-picker__option--active=move || days.get() == window
                                    on:click=move |_| days.set(window)
                                >
                                    {format!("{window} days")}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </header>
            <Show
                when=move || !summary.get().is_failed()
                fallback=|| view! { <p class="page-error">{ANALYTICS_ERROR}</p> }
            >
                <div class="metric-grid">
                    {METRIC_LABELS
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let value = Signal::derive(move || {
                                summary.get().data().map(|s| metric_values(s)[i].clone())
                            });
                            view! { <MetricCard label=label value=value /> }
                        })
                        .collect_view()}
                </div>
            </Show>
        </section>
    }
}
