//! Promotrack TUI — terminal view for the student roster.
//!
//! This crate renders the roster table, the entry form, the search bar, and
//! the alert banner, and routes keyboard input into roster operations. All
//! domain state lives in `promotrack-core`; this crate only tracks what the
//! user is looking at and what they have typed.
//!
//! # Modules
//!
//! - [`app`] — Application state machine and key routing
//! - [`form`] — Entry form fields and focus cycling
//! - [`input`] — Line editing for text fields
//! - [`table`] — ratatui rendering of the roster table and overlays
//! - [`tui`] — Terminal setup and the main event loop

pub mod app;
pub mod form;
pub mod input;
pub mod table;
pub mod tui;
