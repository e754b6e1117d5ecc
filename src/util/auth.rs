//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior. The decision is
//! a pure function of session status and route kind; [`RouteGuard`] only
//! renders it and performs the navigation.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::hooks::session::use_auth;
use crate::state::auth::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

/// Who may see a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Signed-in users only.
    Protected,
    /// Signed-out users only (the login page).
    LoginOnly,
}

/// What a guarded route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Wait,
    Render,
    Redirect(&'static str),
}

pub fn gate(status: SessionStatus, access: RouteAccess) -> GateDecision {
    match (status, access) {
        (SessionStatus::Loading, _) => GateDecision::Wait,
        (SessionStatus::Authenticated, RouteAccess::Protected)
        | (SessionStatus::Unauthenticated, RouteAccess::LoginOnly) => GateDecision::Render,
        (SessionStatus::Unauthenticated, RouteAccess::Protected) => GateDecision::Redirect(LOGIN_PATH),
        (SessionStatus::Authenticated, RouteAccess::LoginOnly) => GateDecision::Redirect(HOME_PATH),
    }
}

/// Render `children` only when [`gate`] allows it; otherwise show the
/// session-check placeholder or replace the current history entry.
#[component]
pub fn RouteGuard(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth().state();
    let decision = Memo::new(move |_| gate(auth.get().status, access));
    let navigate = use_navigate();

    Effect::new(move || {
        if let GateDecision::Redirect(path) = decision.get() {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Wait => view! { <div class="session-check">"Checking your session…"</div> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
    }
}
