//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns base URL, credentials and error mapping, `api` exposes one
//! call per endpoint, and `types` defines the shared wire schema.

pub mod api;
pub mod client;
pub mod types;
