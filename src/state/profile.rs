//! Profile form state.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::{UpdateProfilePayload, User};
use crate::state::lessons::split_tags;

pub const PROFILE_SAVED: &str = "Profile updated successfully.";
pub const PROFILE_ERROR: &str = "Failed to update your profile. Please try again.";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Comma-separated input → trimmed, non-empty entries.
pub fn parse_list(raw: &str) -> Vec<String> {
    split_tags(raw)
}

/// Inverse of [`parse_list`] for pre-filling inputs.
pub fn to_input_string(values: &[String]) -> String {
    values.join(", ")
}

/// Editable profile fields, pre-filled from the session user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub subjects: String,
    pub grades: String,
}

impl ProfileForm {
    pub fn from_user(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |u| Self {
            full_name: u.full_name.clone().unwrap_or_default(),
            subjects: to_input_string(&u.preferred_subjects),
            grades: to_input_string(&u.preferred_grade_levels),
        })
    }

    /// `full_name` is sent as `null` when blank; the locale is carried over.
    pub fn to_payload(&self, user: Option<&User>) -> UpdateProfilePayload {
        let full_name = self.full_name.trim();
        UpdateProfilePayload {
            full_name: (!full_name.is_empty()).then(|| full_name.to_owned()),
            preferred_subjects: parse_list(&self.subjects),
            preferred_grade_levels: parse_list(&self.grades),
            locale: Some(user_locale(user).to_owned()),
        }
    }
}

pub fn user_locale(user: Option<&User>) -> &str {
    match user.map(|u| u.locale.trim()) {
        Some(locale) if !locale.is_empty() => locale,
        _ => DEFAULT_LOCALE,
    }
}
