//! Chrome shared by every signed-in page: navigation, user name, logout.

#[cfg(test)]
#[path = "app_layout_test.rs"]
mod app_layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::hooks::session::use_auth;
use crate::util::auth::LOGIN_PATH;

/// Primary navigation entries.
pub const NAV_LINKS: [(&str, &str); 3] = [("/dashboard", "Dashboard"), ("/lessons", "Lessons"), ("/profile", "Profile")];

/// A nav link is active for its own path and anything below it.
pub fn nav_link_active(pathname: &str, href: &str) -> bool {
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let signing_out = RwSignal::new(false);

    let user_label = move || {
        auth.state()
            .get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.logout().await {
                Ok(()) => navigate(
                    LOGIN_PATH,
                    NavigateOptions {
                        replace: true,
                        ..NavigateOptions::default()
                    },
                ),
                Err(e) => leptos::logging::error!("logout failed: {e}"),
            }
            signing_out.set(false);
        });
    };

    view! {
        <div class="app-layout">
            <header class="app-layout__header">
                <span class="app-layout__brand">"LessonGen"</span>
                <nav class="app-layout__nav">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            let active = move || pathname.with(|p| nav_link_active(p, href));
                            view! {
                                <a href=href class="nav-link" class:nav-link--active=active>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <span class="app-layout__user">{user_label}</span>
                <button
                    type="button"
                    class="app-layout__logout"
                    disabled=move || signing_out.get()
                    on:click=on_logout
                >
                    "Log out"
                </button>
            </header>
            <main class="app-layout__main">{children()}</main>
        </div>
    }
}
