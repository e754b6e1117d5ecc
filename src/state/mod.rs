//! Client-side state: the request cache plus page-local form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is plain data. Components wrap it in `RwSignal`s and hooks
//! drive it from network results, so the rules are unit-tested on the host.

pub mod auth;
pub mod lesson_detail;
pub mod lessons;
pub mod profile;
pub mod query_cache;
pub mod query_key;
