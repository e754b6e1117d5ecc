//! Cache keys for server resources.
//!
//! DESIGN
//! ======
//! A key is an ordered list of segments. Families share a prefix, so a single
//! prefix invalidation reaches every list and detail entry of a resource.

#[cfg(test)]
#[path = "query_key_test.rs"]
mod query_key_test;

use std::fmt;

use crate::net::api::LessonFilters;

/// Ordered cache-key segments, e.g. `["lessons", "detail", "l-1"]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `prefix`'s segments lead this key's segments.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }

    pub fn session() -> Self {
        Self::new(["auth", "session"])
    }

    /// Prefix shared by every lesson list and detail key.
    pub fn lessons_family() -> Self {
        Self::new(["lessons"])
    }

    /// One list key per distinct filter set; the unfiltered list uses `{}`.
    pub fn lessons(filters: &LessonFilters) -> Self {
        Self::new(["lessons".to_owned(), "list".to_owned(), canonical_filters(filters)])
    }

    pub fn lesson_detail(lesson_id: &str) -> Self {
        Self::new(["lessons", "detail", lesson_id])
    }

    pub fn analytics_summary(days: u32) -> Self {
        Self::new(["analytics".to_owned(), "summary".to_owned(), days.to_string()])
    }

    pub fn classroom_connection() -> Self {
        Self::new(["lms", "classroom", "connection"])
    }

    pub fn classroom_pushes(lesson_id: &str) -> Self {
        Self::new(["lms", "classroom", "pushes", lesson_id])
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

/// Stable JSON text for a filter set: fixed field order, absent fields omitted.
fn canonical_filters(filters: &LessonFilters) -> String {
    serde_json::to_string(filters).unwrap_or_else(|_| "{}".to_owned())
}
