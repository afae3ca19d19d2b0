//! Search state and the derived filtered view.
//!
//! [`SearchState`] holds the free-text query and the filtered view derived
//! from it: the ordered subsequence of roster indices whose full name
//! contains the query, case-insensitively. There is no implicit reactivity —
//! the view layer calls [`SearchState::refresh`] after every roster or query
//! change.

use crate::roster::Roster;
use crate::student::Student;


/// Indices of the records whose `first_name + " " + last_name` contains
/// `query` as a case-insensitive substring, in roster order. An empty query
/// matches everything.
pub fn filter_indices(students: &[Student], query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    students
        .iter()
        .enumerate()
        .filter(|(_, s)| s.full_name().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}


/// The search bar state: query text, active flag, and the derived view.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    active: bool,
    matches: Vec<usize>,
}

impl SearchState {
    /// Create an inactive search with an empty query and no derived view.
    /// Call [`SearchState::refresh`] once the roster exists.
    pub fn new() -> Self {
        SearchState::default()
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the search bar is active (visible and editable).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle the search bar. Deactivating clears the query, so the full
    /// roster is shown again.
    pub fn toggle_active(&mut self, roster: &Roster) {
        self.active = !self.active;
        if !self.active {
            self.query.clear();
            self.refresh(roster);
        }
    }

    /// Replace the query and recompute the derived view.
    pub fn set_query(&mut self, query: &str, roster: &Roster) {
        self.query = query.to_string();
        self.refresh(roster);
    }

    /// Recompute the derived view against the current roster. Must be called
    /// after every roster mutation.
    pub fn refresh(&mut self, roster: &Roster) {
        self.matches = filter_indices(roster.students(), &self.query);
    }

    /// Roster indices of the filtered view, in roster order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Number of records in the filtered view.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Translate a row of the rendered (filtered) view back to its roster
    /// index.
    pub fn roster_index(&self, view_row: usize) -> Option<usize> {
        self.matches.get(view_row).copied()
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
