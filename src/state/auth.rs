//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The state is never stored on
//! its own: it is derived from the cached `GET /auth/session` query, so the
//! cache stays the single source of truth.
//!
//! ERROR HANDLING
//! ==============
//! A failed session check is treated as "signed out". The failure is logged
//! at `warn` and never surfaced to the user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;
use crate::state::query_cache::QueryState;

/// Tri-state outcome of the session check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Authentication state tracking the current user and session status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: SessionStatus,
    pub user: Option<User>,
}

impl AuthState {
    /// Project the session query onto the auth contract.
    pub fn from_query(query: QueryState<Option<User>>) -> Self {
        match query {
            QueryState::Disabled | QueryState::Loading => Self::default(),
            QueryState::Failed(message) => {
                leptos::logging::warn!("session check failed: {message}");
                Self::signed_out()
            }
            QueryState::Ready(Some(user)) => Self {
                status: SessionStatus::Authenticated,
                user: Some(user),
            },
            QueryState::Ready(None) => Self::signed_out(),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            status: SessionStatus::Unauthenticated,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }
}
