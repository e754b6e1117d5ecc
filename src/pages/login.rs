//! Login page: one button starting the Google OAuth flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns the OAuth exchange. This page only asks it for the
//! provider URL and leaves the app; the session cookie is set on the way back.

use leptos::prelude::*;

use crate::net::api;
use crate::util::browser;

pub const LOGIN_ERROR: &str = "Unable to start sign-in. Please try again.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let on_login = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::request_login_url().await {
                Ok(url) => browser::set_location(&url),
                Err(e) => {
                    leptos::logging::error!("login url request failed: {e}");
                    error.set(Some(LOGIN_ERROR));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"LessonGen"</h1>
                <p class="login-card__subtitle">"Plan, version and share your lessons."</p>
                <button class="login-button" type="button" disabled=move || busy.get() on:click=on_login>
                    {move || if busy.get() { "Redirecting…" } else { "Continue with Google" }}
                </button>
                {move || error.get().map(|message| view! { <p class="login-message login-message--error">{message}</p> })}
            </div>
        </div>
    }
}
