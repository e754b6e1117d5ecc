//! Data hooks: cache keys, staleness and invalidation rules per resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never touch the cache directly. Reads come from the `use_*` hooks and
//! writes go through the mutation functions, which own the invalidation rules.

pub mod analytics;
pub mod classroom;
pub mod lessons;
pub mod profile;
pub mod query;
pub mod session;
