//! The roster store — the ordered collection of student records.
//!
//! All mutations go through three operations: [`Roster::add`] (validated),
//! [`Roster::toggle_completion`], and [`Roster::remove`] (guarded). Records
//! keep insertion order; removal preserves the relative order of the rest.

use serde::{Deserialize, Serialize};

use crate::draft::StudentDraft;
use crate::error::RosterError;
use crate::student::{format_age, Student, TrainingStatus};


/// The ordered sequence of all student records currently held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Roster::default()
    }

    /// All records, in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// The record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    // -------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------

    /// Validate a draft and append it as a new record.
    ///
    /// Fails with [`RosterError::MissingFields`] if any required field is
    /// empty and with [`RosterError::DuplicateStudent`] if a record with the
    /// same (email, domain) pair already exists. On success the new record
    /// starts with `completed = false` and its age formatted with
    /// `age_suffix`. The caller is expected to clear the draft afterwards.
    pub fn add(
        &mut self,
        draft: &StudentDraft,
        age_suffix: &str,
    ) -> Result<&Student, RosterError> {
        draft.validate()?;

        let email = draft.email.trim();
        let domain = draft.domain.trim();
        if self.students.iter().any(|s| s.has_key(email, domain)) {
            return Err(RosterError::DuplicateStudent);
        }

        self.students.push(Student {
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            age: format_age(&draft.age, age_suffix),
            email: email.to_string(),
            domain: domain.to_string(),
            status: TrainingStatus::InProgress,
            completed: false,
        });
        Ok(self.students.last().unwrap())
    }

    /// Flip the completion flag of the record at `index`, keeping `status`
    /// in sync. Out-of-range indices are ignored; returns whether a record
    /// was toggled.
    pub fn toggle_completion(&mut self, index: usize) -> bool {
        match self.students.get_mut(index) {
            Some(student) => {
                let flipped = !student.completed;
                student.set_completed(flipped);
                true
            }
            None => false,
        }
    }

    /// Remove the record at `index` and return it.
    ///
    /// Fails with [`RosterError::NotCompleted`] unless the record's training
    /// is completed, and with [`RosterError::OutOfRange`] if the index does
    /// not refer to a record. The relative order of the remaining records is
    /// preserved.
    pub fn remove(&mut self, index: usize) -> Result<Student, RosterError> {
        let student = self
            .students
            .get(index)
            .ok_or(RosterError::OutOfRange(index))?;
        if !student.status.is_completed() {
            return Err(RosterError::NotCompleted);
        }
        Ok(self.students.remove(index))
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
