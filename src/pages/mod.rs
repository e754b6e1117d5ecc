//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page maps to one route in `app::App`. Pages bind form state from
//! `crate::state` and call data hooks; they never talk to the cache directly.

pub mod dashboard;
pub mod lesson_detail;
pub mod lessons;
pub mod login;
pub mod not_found;
pub mod profile;
