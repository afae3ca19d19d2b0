//! The draft — pending form values not yet committed as a record.
//!
//! The view layer fills a [`StudentDraft`] from its input fields and hands it
//! to the roster's add operation. Validation happens there, not here on every
//! keystroke; the draft only knows how to check itself and reset.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;


/// The set of pending input field values for a new student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    /// Raw age input; the unit suffix is appended by the add operation.
    pub age: String,
    pub email: String,
    pub domain: String,
}

impl StudentDraft {
    /// Create an empty draft.
    pub fn new() -> Self {
        StudentDraft::default()
    }

    /// Check that every required field is non-empty after trimming.
    pub fn validate(&self) -> Result<(), RosterError> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.age,
            &self.email,
            &self.domain,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(RosterError::MissingFields);
        }
        Ok(())
    }

    /// Reset every field to empty. Called after a successful add.
    pub fn clear(&mut self) {
        *self = StudentDraft::default();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.age.is_empty()
            && self.email.is_empty()
            && self.domain.is_empty()
    }
}
