//! The entry form — five text fields and a focus cycle.
//!
//! `FormState` owns one [`InputLine`] per draft field. Tab moves the focus
//! forward, BackTab moves it backward, and submitting produces a
//! [`StudentDraft`] for the roster's add operation.

use promotrack_core::draft::StudentDraft;

use crate::input::InputLine;


// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// One of the five draft fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Age,
    Email,
    Domain,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 5] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Age,
        FormField::Email,
        FormField::Domain,
    ];

    /// Placeholder / column label for this field.
    pub fn label(&self) -> &str {
        match self {
            FormField::FirstName => "Prénom",
            FormField::LastName => "Nom",
            FormField::Age => "Age",
            FormField::Email => "Email",
            FormField::Domain => "Domaine d'étude",
        }
    }

    /// The field after this one, wrapping around.
    pub fn next(&self) -> FormField {
        match self {
            FormField::FirstName => FormField::LastName,
            FormField::LastName => FormField::Age,
            FormField::Age => FormField::Email,
            FormField::Email => FormField::Domain,
            FormField::Domain => FormField::FirstName,
        }
    }

    /// The field before this one, wrapping around.
    pub fn prev(&self) -> FormField {
        match self {
            FormField::FirstName => FormField::Domain,
            FormField::LastName => FormField::FirstName,
            FormField::Age => FormField::LastName,
            FormField::Email => FormField::Age,
            FormField::Domain => FormField::Email,
        }
    }

    fn index(&self) -> usize {
        match self {
            FormField::FirstName => 0,
            FormField::LastName => 1,
            FormField::Age => 2,
            FormField::Email => 3,
            FormField::Domain => 4,
        }
    }
}


// ---------------------------------------------------------------------------
// FormState
// ---------------------------------------------------------------------------

/// The pending-entry form: one input line per field plus the focused field.
#[derive(Debug, Clone)]
pub struct FormState {
    fields: [InputLine; 5],
    focus: FormField,
}

impl FormState {
    /// Create an empty form focused on the first field.
    pub fn new() -> Self {
        FormState {
            fields: Default::default(),
            focus: FormField::FirstName,
        }
    }

    /// The currently focused field.
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Move the focus to the next field.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move the focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The input line of the focused field.
    pub fn active_line(&mut self) -> &mut InputLine {
        &mut self.fields[self.focus.index()]
    }

    /// The current text of a field.
    pub fn value(&self, field: FormField) -> String {
        self.fields[field.index()].text()
    }

    /// Cursor position within the focused field.
    pub fn active_cursor(&self) -> usize {
        self.fields[self.focus.index()].cursor_pos()
    }

    /// Build a draft from the current field values.
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            first_name: self.value(FormField::FirstName),
            last_name: self.value(FormField::LastName),
            age: self.value(FormField::Age),
            email: self.value(FormField::Email),
            domain: self.value(FormField::Domain),
        }
    }

    /// Reset every field and refocus the first one. Called after a
    /// successful add.
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.focus = FormField::FirstName;
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(InputLine::is_empty)
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
