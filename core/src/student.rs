//! Student record types.
//!
//! A [`Student`] is created exclusively through the roster's add operation
//! and is immutable afterwards, except for the `completed`/`status` pair
//! which the toggle operation changes together.

use serde::{Deserialize, Serialize};


// ---------------------------------------------------------------------------
// TrainingStatus
// ---------------------------------------------------------------------------

/// The two values of a student's training status.
///
/// Always derived from `completed`; never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingStatus {
    InProgress,
    Completed,
}

impl TrainingStatus {
    /// Derive the status from a completion flag.
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            TrainingStatus::Completed
        } else {
            TrainingStatus::InProgress
        }
    }

    /// Whether this status allows removal from the roster.
    pub fn is_completed(&self) -> bool {
        matches!(self, TrainingStatus::Completed)
    }
}


// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A single student record in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    /// Display string with the unit suffix appended at creation time
    /// (e.g. `"20 ans"`); never re-parsed.
    pub age: String,
    pub email: String,
    /// Field of study; together with `email` forms the uniqueness key.
    pub domain: String,
    pub status: TrainingStatus,
    pub completed: bool,
}

impl Student {
    /// Full name as matched by the search filter: first and last name joined
    /// by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record has the given (email, domain) uniqueness key.
    pub fn has_key(&self, email: &str, domain: &str) -> bool {
        self.email == email && self.domain == domain
    }

    /// Set the completion flag, rederiving `status` so the two stay in sync.
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.status = TrainingStatus::from_completed(completed);
    }
}


// ---------------------------------------------------------------------------
// Age formatting
// ---------------------------------------------------------------------------

/// Format a raw age input for display: the leading integer of the input
/// followed by the unit suffix (`"20" -> "20 ans"`, `"20.5" -> "20 ans"`).
/// Input without a numeric prefix is kept verbatim (trimmed) before the
/// suffix.
pub fn format_age(raw: &str, suffix: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        format!("{} {}", trimmed, suffix)
    } else {
        format!("{} {}", digits, suffix)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
