//! Lesson list page state: filter inputs and the create-lesson form.

#[cfg(test)]
#[path = "lessons_test.rs"]
mod lessons_test;

use crate::net::api::LessonFilters;
use crate::net::types::CreateLessonPayload;

pub const REQUIRED_FIELDS_ERROR: &str = "Title, subject, and grade level are required.";
pub const DURATION_ERROR: &str = "Duration must be a positive whole number of minutes.";
pub const CREATE_ERROR: &str = "Unable to create the lesson. Please try again.";

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

fn trimmed(raw: &str) -> Option<String> {
    let t = raw.trim();
    (!t.is_empty()).then(|| t.to_owned())
}

/// Raw filter-bar inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub subject: String,
    pub grade_level: String,
    /// Comma-separated.
    pub tags: String,
}

impl FilterInputs {
    pub fn to_filters(&self) -> LessonFilters {
        LessonFilters {
            subject: trimmed(&self.subject),
            grade_level: trimmed(&self.grade_level),
            tags: split_tags(&self.tags),
        }
    }
}

/// Inputs of the create-lesson form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLessonForm {
    pub title: String,
    pub subject: String,
    pub grade_level: String,
    pub language: String,
    pub tags: String,
    pub objective: String,
    pub duration_minutes: String,
}

impl Default for NewLessonForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            subject: String::new(),
            grade_level: String::new(),
            language: "en".to_owned(),
            tags: String::new(),
            objective: String::new(),
            duration_minutes: String::new(),
        }
    }
}

impl NewLessonForm {
    /// Validate and build the create payload.
    ///
    /// # Errors
    ///
    /// Returns the inline message for missing required fields or a bad duration.
    pub fn to_payload(&self) -> Result<CreateLessonPayload, &'static str> {
        let (Some(title), Some(subject), Some(grade_level)) =
            (trimmed(&self.title), trimmed(&self.subject), trimmed(&self.grade_level))
        else {
            return Err(REQUIRED_FIELDS_ERROR);
        };
        let duration_minutes = match trimmed(&self.duration_minutes) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => return Err(DURATION_ERROR),
            },
        };
        let tags = split_tags(&self.tags);
        Ok(CreateLessonPayload {
            title,
            subject,
            grade_level,
            language: trimmed(&self.language),
            tags: (!tags.is_empty()).then_some(tags),
            objective: trimmed(&self.objective),
            duration_minutes,
            teacher_script_md: None,
        })
    }
}
