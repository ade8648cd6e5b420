//! Field validation rules applied when tasks are created or edited.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration for task field validation.
///
/// Deserialises with defaults for missing keys, so a host can load a partial
/// configuration from any serde source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRules {
    /// Maximum title length in characters.
    pub max_title_length: usize,
    /// Whether a task may be created with a due date that has already passed.
    pub allow_past_due_dates: bool,
}

impl Default for TaskRules {
    fn default() -> Self {
        Self {
            max_title_length: 200,
            allow_past_due_dates: false,
        }
    }
}

impl TaskRules {
    /// Creates a lenient configuration that accepts past due dates.
    ///
    /// Useful when importing historical records.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            allow_past_due_dates: true,
            ..Default::default()
        }
    }

    /// Validates and normalizes a task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] for blank titles and
    /// [`TaskDomainError::TaskTitleTooLong`] when the trimmed title exceeds
    /// [`Self::max_title_length`].
    pub fn normalize_title(&self, raw: &str) -> Result<String, TaskDomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskTitle);
        }
        let actual = trimmed.chars().count();
        if actual > self.max_title_length {
            return Err(TaskDomainError::TaskTitleTooLong {
                max: self.max_title_length,
                actual,
            });
        }
        Ok(trimmed.to_owned())
    }

    /// Checks a creation-time due date against the creation instant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DueDateInPast`] when `due_date` precedes
    /// `now` and past due dates are not allowed.
    pub fn check_due_date(
        &self,
        due_date: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<(), TaskDomainError> {
        match due_date {
            Some(due) if !self.allow_past_due_dates && due < now => {
                Err(TaskDomainError::DueDateInPast { due_date: due })
            }
            _ => Ok(()),
        }
    }
}

/// Trims optional free text, mapping blank values to `None`.
pub(super) fn normalize_optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}
