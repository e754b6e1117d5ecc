//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <p>"Page not found."</p>
            <a href="/dashboard">"Back to dashboard"</a>
        </section>
    }
}
