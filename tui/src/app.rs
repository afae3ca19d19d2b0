//! Main TUI application state machine.
//!
//! Manages input modes, key routing, selection, and the entry form. The
//! `App` struct owns what the user is looking at and what they have typed —
//! it holds no roster data and performs no I/O. Keys produce [`AppAction`]s
//! that the event loop applies to the domain state.

use crate::form::FormState;
use crate::input::InputLine;


// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// The current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the roster table.
    Browse,
    /// Editing the entry form (one field focused).
    FormEntry,
    /// Editing the search query.
    SearchEntry,
}

impl Mode {
    /// Short label for the status line.
    pub fn label(&self) -> &str {
        match self {
            Mode::Browse => "liste",
            Mode::FormEntry => "saisie",
            Mode::SearchEntry => "recherche",
        }
    }
}


// ---------------------------------------------------------------------------
// AppAction
// ---------------------------------------------------------------------------

/// An action produced by the state machine in response to user input.
///
/// Row indices refer to the rendered (filtered) view; the event loop
/// translates them to roster indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Commit the entry form as a new record.
    SubmitDraft,
    /// Flip completion of the record at the given view row.
    ToggleCompletion(usize),
    /// Delete the record at the given view row.
    Remove(usize),
    /// Move the selection down one row.
    SelectNext,
    /// Move the selection up one row.
    SelectPrev,
    /// The search query text changed.
    QueryChanged,
    /// The search bar was activated or deactivated.
    ToggleSearch,
    /// Quit the application.
    Quit,
}


// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Top-level UI state: mode, selection, entry form, and search input.
pub struct App {
    /// Current input mode.
    pub mode: Mode,
    /// Entry form fields and focus.
    pub form: FormState,
    /// Search query editor.
    pub search: InputLine,
    /// Selected row in the rendered (filtered) table.
    pub selected: usize,
    /// Whether the search bar is open (it stays visible with its query
    /// applied after leaving `SearchEntry` with Enter).
    search_open: bool,
}

impl App {
    /// Create a new App in browse mode.
    pub fn new() -> Self {
        App {
            mode: Mode::Browse,
            form: FormState::new(),
            search: InputLine::new(),
            selected: 0,
            search_open: false,
        }
    }

    /// Whether the search bar is open.
    pub fn search_open(&self) -> bool {
        self.search_open
    }

    // -------------------------------------------------------------------
    // Key routing
    // -------------------------------------------------------------------

    /// Process a key event and return an optional action.
    pub fn handle_key(&mut self, key: Key) -> Option<AppAction> {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::FormEntry => self.handle_form_key(key),
            Mode::SearchEntry => self.handle_search_key(key),
        }
    }

    fn handle_browse_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Char('q') => Some(AppAction::Quit),
            Key::Char('a') => {
                self.mode = Mode::FormEntry;
                None
            }
            Key::Char('/') => Some(self.toggle_search()),
            Key::Char('j') | Key::Down => Some(AppAction::SelectNext),
            Key::Char('k') | Key::Up => Some(AppAction::SelectPrev),
            Key::Char('t') | Key::Char(' ') | Key::Enter => {
                Some(AppAction::ToggleCompletion(self.selected))
            }
            Key::Char('d') | Key::Delete => Some(AppAction::Remove(self.selected)),
            Key::Escape => {
                if self.search_open {
                    Some(self.toggle_search())
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn handle_form_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Escape => {
                self.mode = Mode::Browse;
                None
            }
            Key::Enter => Some(AppAction::SubmitDraft),
            Key::Tab => {
                self.form.focus_next();
                None
            }
            Key::BackTab => {
                self.form.focus_prev();
                None
            }
            Key::Backspace => {
                self.form.active_line().delete_back();
                None
            }
            Key::Delete => {
                self.form.active_line().delete_forward();
                None
            }
            Key::Left => {
                self.form.active_line().move_left();
                None
            }
            Key::Right => {
                self.form.active_line().move_right();
                None
            }
            Key::Home => {
                self.form.active_line().move_home();
                None
            }
            Key::End => {
                self.form.active_line().move_end();
                None
            }
            Key::Ctrl('w') => {
                self.form.active_line().delete_word_back();
                None
            }
            Key::Ctrl('u') => {
                self.form.active_line().clear();
                None
            }
            Key::Char(ch) => {
                self.form.active_line().insert(ch);
                None
            }
            _ => None,
        }
    }

    fn handle_search_key(&mut self, key: Key) -> Option<AppAction> {
        match key {
            Key::Escape => Some(self.toggle_search()),
            Key::Enter => {
                // Keep the query applied; go back to table navigation.
                self.mode = Mode::Browse;
                None
            }
            Key::Backspace => {
                self.search.delete_back();
                Some(AppAction::QueryChanged)
            }
            Key::Delete => {
                self.search.delete_forward();
                Some(AppAction::QueryChanged)
            }
            Key::Left => {
                self.search.move_left();
                None
            }
            Key::Right => {
                self.search.move_right();
                None
            }
            Key::Home => {
                self.search.move_home();
                None
            }
            Key::End => {
                self.search.move_end();
                None
            }
            Key::Ctrl('u') => {
                self.search.clear();
                Some(AppAction::QueryChanged)
            }
            Key::Char(ch) => {
                self.search.insert(ch);
                Some(AppAction::QueryChanged)
            }
            _ => None,
        }
    }

    /// Open or close the search bar, mirroring the core search state.
    fn toggle_search(&mut self) -> AppAction {
        if self.search_open {
            self.search_open = false;
            self.search.clear();
            self.mode = Mode::Browse;
        } else {
            self.search_open = true;
            self.mode = Mode::SearchEntry;
        }
        AppAction::ToggleSearch
    }

    // -------------------------------------------------------------------
    // Selection helpers
    // -------------------------------------------------------------------

    /// Move the selection up, clamping to 0.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down, clamping to `max_index`.
    pub fn select_next(&mut self, max_index: usize) {
        if self.selected < max_index {
            self.selected += 1;
        }
    }

    /// Clamp the selection into `0..row_count` after the view shrank.
    pub fn clamp_selection(&mut self, row_count: usize) {
        if row_count == 0 {
            self.selected = 0;
        } else if self.selected >= row_count {
            self.selected = row_count - 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}


// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A simplified key event for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Escape,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Ctrl(char),
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    // --- Construction ---

    #[test]
    fn new_starts_in_browse() {
        let app = App::new();
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.selected, 0);
        assert!(!app.search_open());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Browse.label(), "liste");
        assert_eq!(Mode::FormEntry.label(), "saisie");
        assert_eq!(Mode::SearchEntry.label(), "recherche");
    }

    // --- Browse mode ---

    #[test]
    fn quit_key() {
        let mut app = App::new();
        assert_eq!(app.handle_key(Key::Char('q')), Some(AppAction::Quit));
    }

    #[test]
    fn a_enters_form_mode() {
        let mut app = App::new();
        assert!(app.handle_key(Key::Char('a')).is_none());
        assert_eq!(app.mode, Mode::FormEntry);
    }

    #[test]
    fn slash_opens_search() {
        let mut app = App::new();
        let action = app.handle_key(Key::Char('/'));
        assert_eq!(action, Some(AppAction::ToggleSearch));
        assert_eq!(app.mode, Mode::SearchEntry);
        assert!(app.search_open());
    }

    #[test]
    fn selection_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(Key::Char('j')), Some(AppAction::SelectNext));
        assert_eq!(app.handle_key(Key::Down), Some(AppAction::SelectNext));
        assert_eq!(app.handle_key(Key::Char('k')), Some(AppAction::SelectPrev));
        assert_eq!(app.handle_key(Key::Up), Some(AppAction::SelectPrev));
    }

    #[test]
    fn toggle_keys_carry_selected_row() {
        let mut app = App::new();
        app.selected = 2;
        assert_eq!(
            app.handle_key(Key::Enter),
            Some(AppAction::ToggleCompletion(2))
        );
        assert_eq!(
            app.handle_key(Key::Char('t')),
            Some(AppAction::ToggleCompletion(2))
        );
    }

    #[test]
    fn delete_keys_carry_selected_row() {
        let mut app = App::new();
        app.selected = 1;
        assert_eq!(app.handle_key(Key::Char('d')), Some(AppAction::Remove(1)));
        assert_eq!(app.handle_key(Key::Delete), Some(AppAction::Remove(1)));
    }

    #[test]
    fn escape_in_browse_closes_open_search() {
        let mut app = App::new();
        app.handle_key(Key::Char('/'));
        app.handle_key(Key::Enter); // back to browse, bar stays open
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.search_open());

        let action = app.handle_key(Key::Escape);
        assert_eq!(action, Some(AppAction::ToggleSearch));
        assert!(!app.search_open());
    }

    #[test]
    fn escape_in_browse_without_search_is_ignored() {
        let mut app = App::new();
        assert!(app.handle_key(Key::Escape).is_none());
    }

    // --- Form mode ---

    #[test]
    fn form_typing_fills_focused_field() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Char('A'));
        app.handle_key(Key::Char('n'));
        app.handle_key(Key::Char('a'));
        assert_eq!(app.form.value(FormField::FirstName), "Ana");
    }

    #[test]
    fn form_tab_cycles_focus() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Tab);
        assert_eq!(app.form.focus(), FormField::LastName);
        app.handle_key(Key::BackTab);
        assert_eq!(app.form.focus(), FormField::FirstName);
    }

    #[test]
    fn form_enter_submits() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'));
        assert_eq!(app.handle_key(Key::Enter), Some(AppAction::SubmitDraft));
    }

    #[test]
    fn form_escape_returns_to_browse_keeping_fields() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Char('x'));
        app.handle_key(Key::Escape);
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(app.form.value(FormField::FirstName), "x");
    }

    #[test]
    fn form_editing_keys() {
        let mut app = App::new();
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Char('b'));
        app.handle_key(Key::Backspace);
        assert_eq!(app.form.value(FormField::FirstName), "a");
        app.handle_key(Key::Ctrl('u'));
        assert_eq!(app.form.value(FormField::FirstName), "");
    }

    // --- Search mode ---

    #[test]
    fn search_typing_reports_query_changes() {
        let mut app = App::new();
        app.handle_key(Key::Char('/'));
        assert_eq!(
            app.handle_key(Key::Char('a')),
            Some(AppAction::QueryChanged)
        );
        assert_eq!(
            app.handle_key(Key::Backspace),
            Some(AppAction::QueryChanged)
        );
        assert!(app.search.is_empty());
    }

    #[test]
    fn search_enter_keeps_query() {
        let mut app = App::new();
        app.handle_key(Key::Char('/'));
        app.handle_key(Key::Char('a'));
        assert!(app.handle_key(Key::Enter).is_none());
        assert_eq!(app.mode, Mode::Browse);
        assert!(app.search_open());
        assert_eq!(app.search.text(), "a");
    }

    #[test]
    fn search_escape_closes_and_clears() {
        let mut app = App::new();
        app.handle_key(Key::Char('/'));
        app.handle_key(Key::Char('a'));
        let action = app.handle_key(Key::Escape);
        assert_eq!(action, Some(AppAction::ToggleSearch));
        assert_eq!(app.mode, Mode::Browse);
        assert!(!app.search_open());
        assert!(app.search.is_empty());
    }

    #[test]
    fn search_ctrl_u_clears_query() {
        let mut app = App::new();
        app.handle_key(Key::Char('/'));
        app.handle_key(Key::Char('a'));
        app.handle_key(Key::Char('b'));
        assert_eq!(app.handle_key(Key::Ctrl('u')), Some(AppAction::QueryChanged));
        assert!(app.search.is_empty());
    }

    // --- Selection helpers ---

    #[test]
    fn select_next_clamps_at_max() {
        let mut app = App::new();
        app.select_next(1);
        app.select_next(1);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn select_prev_clamps_at_zero() {
        let mut app = App::new();
        app.select_prev();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn clamp_selection_after_view_shrinks() {
        let mut app = App::new();
        app.selected = 4;
        app.clamp_selection(3);
        assert_eq!(app.selected, 2);
        app.clamp_selection(0);
        assert_eq!(app.selected, 0);
    }
}
