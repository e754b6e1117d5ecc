//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and lesson presentation while reading shared
//! state from Leptos context providers.

pub mod app_layout;
pub mod lesson_card;
pub mod metric_card;
pub mod notice;
pub mod version_card;
