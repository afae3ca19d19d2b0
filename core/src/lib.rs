//! Promotrack core — in-memory student roster management.
//!
//! This crate holds the domain layer of Promotrack: the roster of student
//! records and the state-transition rules that govern it (validation on add,
//! duplicate detection, status toggling, the delete guard, and search
//! filtering). Nothing here touches a terminal; all state is plain data that
//! the view layer renders and mutates through the operations defined on it.
//!
//! # Modules
//!
//! - [`alert`] — Single-slot transient alert with auto-clear
//! - [`draft`] — Pending form values not yet committed as a record
//! - [`error`] — Roster operation errors
//! - [`filter`] — Search query and derived filtered view
//! - [`roster`] — The roster store and its operations
//! - [`settings`] — Display labels and timing configuration
//! - [`student`] — Student record types

pub mod alert;
pub mod draft;
pub mod error;
pub mod filter;
pub mod roster;
pub mod settings;
pub mod student;
