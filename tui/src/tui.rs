//! TUI runner — ratatui event loop with terminal setup and cleanup.
//!
//! The [`Tui`] struct owns the ratatui terminal, the UI state machine
//! ([`App`]), and the [`Session`] holding the domain state (roster, search,
//! alert, settings). It runs the main loop: draw a frame, poll for keyboard
//! events, apply actions, and expire the alert on every tick. Each action
//! runs to completion inside one loop iteration; the only deferred effect is
//! the alert auto-clear.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use ratatui::Terminal;

use promotrack_core::alert::AlertSlot;
use promotrack_core::filter::SearchState;
use promotrack_core::roster::Roster;
use promotrack_core::settings::Settings;

use crate::app::{App, AppAction, Key, Mode};
use crate::table;


// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The domain state behind the view: roster, derived search view, alert
/// slot, and settings. Separated from [`Tui`] so that action handling can be
/// exercised without a terminal.
pub struct Session {
    pub roster: Roster,
    pub search: SearchState,
    pub alert: AlertSlot,
    pub settings: Settings,
}

impl Session {
    /// Create a session over an empty roster.
    pub fn new(settings: Settings) -> Self {
        Session::with_roster(settings, Roster::new())
    }

    /// Create a session over an existing roster (e.g. seeded sample data).
    pub fn with_roster(settings: Settings, roster: Roster) -> Self {
        let mut search = SearchState::new();
        search.refresh(&roster);
        let alert = AlertSlot::new(settings.alert_ttl_ms);
        Session {
            roster,
            search,
            alert,
            settings,
        }
    }

    /// Apply an action produced by the state machine. Returns `true` when
    /// the application should quit.
    ///
    /// Row indices in actions refer to the rendered (filtered) view and are
    /// translated to roster indices here. After every roster or query
    /// mutation the derived view is recomputed and the selection clamped.
    pub fn apply(&mut self, app: &mut App, action: AppAction, now_ms: u64) -> bool {
        match action {
            AppAction::Quit => return true,
            AppAction::SelectNext => {
                let max = self.search.match_count().saturating_sub(1);
                app.select_next(max);
            }
            AppAction::SelectPrev => {
                app.select_prev();
            }
            AppAction::SubmitDraft => {
                let draft = app.form.to_draft();
                match self.roster.add(&draft, &self.settings.age_suffix) {
                    Ok(_) => {
                        app.form.clear();
                        app.mode = Mode::Browse;
                        self.search.refresh(&self.roster);
                    }
                    Err(e) => {
                        self.alert.set(&e.to_string(), now_ms);
                    }
                }
            }
            AppAction::ToggleCompletion(view_row) => {
                if let Some(index) = self.search.roster_index(view_row) {
                    self.roster.toggle_completion(index);
                    self.search.refresh(&self.roster);
                }
            }
            AppAction::Remove(view_row) => {
                if let Some(index) = self.search.roster_index(view_row) {
                    match self.roster.remove(index) {
                        Ok(_) => {
                            self.alert.clear();
                            self.search.refresh(&self.roster);
                            app.clamp_selection(self.search.match_count());
                        }
                        Err(e) => {
                            self.alert.set(&e.to_string(), now_ms);
                        }
                    }
                }
            }
            AppAction::QueryChanged => {
                self.search.set_query(&app.search.text(), &self.roster);
                app.clamp_selection(self.search.match_count());
            }
            AppAction::ToggleSearch => {
                self.search.toggle_active(&self.roster);
                app.clamp_selection(self.search.match_count());
            }
        }
        false
    }

    /// Per-tick maintenance: expire the alert if its window has elapsed.
    pub fn tick(&mut self, now_ms: u64) {
        self.alert.clear_expired(now_ms);
    }
}


// ---------------------------------------------------------------------------
// Tui
// ---------------------------------------------------------------------------

/// The main TUI application runner.
///
/// Manages terminal raw mode, the alternate screen, the ratatui terminal
/// backend, the UI state machine, and the domain session.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    session: Session,
    tick_rate: Duration,
}

impl Tui {
    /// Create a new TUI over an empty roster, entering raw mode and the
    /// alternate screen.
    pub fn new(settings: Settings) -> Result<Self, io::Error> {
        Self::with_roster(settings, Roster::new())
    }

    /// Create a new TUI over an existing roster.
    pub fn with_roster(settings: Settings, roster: Roster) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(settings.tick_rate_ms);
        Ok(Self {
            terminal,
            app: App::new(),
            session: Session::with_roster(settings, roster),
            tick_rate,
        })
    }

    /// Run the main event loop until quit is requested.
    pub fn run(&mut self) -> Result<(), io::Error> {
        let mut last_tick = Instant::now();

        loop {
            let app = &self.app;
            let session = &self.session;
            self.terminal.draw(|frame| render_frame(frame, app, session))?;

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)? {
                if let Event::Key(key_event) = event::read()? {
                    // Ctrl-C always quits immediately.
                    if key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }

                    let key = crossterm_to_key(key_event.code, key_event.modifiers);
                    if let Some(action) = self.app.handle_key(key) {
                        if self.session.apply(&mut self.app, action, now_ms()) {
                            break;
                        }
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.session.tick(now_ms());
                last_tick = Instant::now();
            }
        }

        self.shutdown()
    }

    /// Restore the terminal to its normal state.
    fn shutdown(&mut self) -> Result<(), io::Error> {
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
    }
}


/// Current wall-clock time in milliseconds since the epoch.
fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}


// ---------------------------------------------------------------------------
// Rendering (free functions to avoid borrow conflicts)
// ---------------------------------------------------------------------------

/// Render the full screen: search bar (when open), form strip, roster
/// table, status line, and the alert banner overlay.
fn render_frame(frame: &mut Frame, app: &App, session: &Session) {
    let mut constraints = Vec::new();
    if app.search_open() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3)); // entry form
    constraints.push(Constraint::Min(5)); // roster table
    constraints.push(Constraint::Length(1)); // status line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let mut next = 0;
    if app.search_open() {
        table::render_search_bar(frame, chunks[0], app);
        next = 1;
    }
    table::render_form(frame, chunks[next], &app.form, app.mode == Mode::FormEntry);
    table::render_roster(
        frame,
        chunks[next + 1],
        &session.roster,
        &session.search,
        &session.settings,
        app.selected,
    );
    table::render_status_line(frame, chunks[next + 2], app.mode);

    // Alert banner overlays the top of the table area.
    table::render_alert(frame, chunks[next + 1], &session.alert);
}


// ---------------------------------------------------------------------------
// Key conversion
// ---------------------------------------------------------------------------

/// Convert a crossterm `KeyCode` + `KeyModifiers` into our domain `Key` type.
pub fn crossterm_to_key(code: KeyCode, modifiers: KeyModifiers) -> Key {
    if modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(ch) = code {
            return Key::Ctrl(ch);
        }
    }
    match code {
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        _ => Key::Char('\0'), // unmapped keys produce a null char
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use promotrack_core::student::TrainingStatus;

    fn session() -> Session {
        Session::new(Settings::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(Key::Char(ch));
        }
    }

    /// Drive the app+session through a full form entry for one student.
    fn submit_student(app: &mut App, session: &mut Session, fields: [&str; 5]) {
        if app.mode != Mode::FormEntry {
            app.handle_key(Key::Char('a'));
        }
        for (i, text) in fields.iter().enumerate() {
            type_text(app, text);
            if i < 4 {
                app.handle_key(Key::Tab);
            }
        }
        let action = app.handle_key(Key::Enter).unwrap();
        session.apply(app, action, 0);
    }

    // --- Session::apply ---

    #[test]
    fn submit_valid_draft_adds_and_clears_form() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);

        assert_eq!(s.roster.len(), 1);
        assert_eq!(s.roster.get(0).unwrap().age, "20 ans");
        assert!(app.form.is_empty());
        assert_eq!(app.mode, Mode::Browse);
        assert_eq!(s.search.match_count(), 1);
        assert!(!s.alert.is_showing());
    }

    #[test]
    fn submit_incomplete_draft_raises_alert() {
        let mut app = App::new();
        let mut s = session();
        app.handle_key(Key::Char('a'));
        type_text(&mut app, "Ana");
        let action = app.handle_key(Key::Enter).unwrap();
        s.apply(&mut app, action, 100);

        assert!(s.roster.is_empty());
        assert!(s.alert.is_showing());
        assert!(s.alert.message().unwrap().contains("remplir tous les champs"));
        // The form keeps its values so the user can finish it.
        assert!(!app.form.is_empty());
        assert_eq!(app.mode, Mode::FormEntry);
    }

    #[test]
    fn submit_duplicate_raises_alert() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Mia", "Kim", "23", "a@x.com", "CS"]);

        assert_eq!(s.roster.len(), 1);
        assert!(s.alert.message().unwrap().contains("existe déjà"));
    }

    #[test]
    fn toggle_completion_through_filtered_view() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Bob", "Ray", "25", "b@x.com", "CS"]);

        // Filter down to Bob, then toggle view row 0.
        let action = app.handle_key(Key::Char('/')).unwrap();
        s.apply(&mut app, action, 0);
        type_text(&mut app, "bob");
        s.apply(&mut app, AppAction::QueryChanged, 0);
        assert_eq!(s.search.matches(), &[1]);

        s.apply(&mut app, AppAction::ToggleCompletion(0), 0);
        assert_eq!(s.roster.get(1).unwrap().status, TrainingStatus::Completed);
        assert_eq!(s.roster.get(0).unwrap().status, TrainingStatus::InProgress);
    }

    #[test]
    fn remove_incomplete_record_is_guarded() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);

        s.apply(&mut app, AppAction::Remove(0), 500);
        assert_eq!(s.roster.len(), 1);
        assert!(s.alert.message().unwrap().contains("pas encore terminée"));
    }

    #[test]
    fn remove_completed_record_clears_alert() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);

        s.alert.set("stale", 0);
        s.apply(&mut app, AppAction::ToggleCompletion(0), 0);
        s.apply(&mut app, AppAction::Remove(0), 0);

        assert!(s.roster.is_empty());
        assert!(!s.alert.is_showing());
        assert_eq!(s.search.match_count(), 0);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn remove_out_of_view_row_is_ignored() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);

        s.apply(&mut app, AppAction::Remove(5), 0);
        assert_eq!(s.roster.len(), 1);
        assert!(!s.alert.is_showing());
    }

    #[test]
    fn query_change_clamps_selection() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Bob", "Ray", "25", "b@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Cleo", "Fox", "22", "c@x.com", "CS"]);
        app.selected = 2;

        let action = app.handle_key(Key::Char('/')).unwrap();
        s.apply(&mut app, action, 0);
        type_text(&mut app, "bob");
        s.apply(&mut app, AppAction::QueryChanged, 0);

        assert_eq!(s.search.match_count(), 1);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn closing_search_restores_full_view() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Bob", "Ray", "25", "b@x.com", "CS"]);

        let action = app.handle_key(Key::Char('/')).unwrap();
        s.apply(&mut app, action, 0);
        type_text(&mut app, "bob");
        s.apply(&mut app, AppAction::QueryChanged, 0);
        assert_eq!(s.search.match_count(), 1);

        let action = app.handle_key(Key::Escape).unwrap();
        s.apply(&mut app, action, 0);
        assert!(!s.search.is_active());
        assert_eq!(s.search.match_count(), 2);
    }

    #[test]
    fn selection_moves_within_view_bounds() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);
        submit_student(&mut app, &mut s, ["Bob", "Ray", "25", "b@x.com", "CS"]);

        s.apply(&mut app, AppAction::SelectNext, 0);
        s.apply(&mut app, AppAction::SelectNext, 0);
        assert_eq!(app.selected, 1); // clamped at last row
        s.apply(&mut app, AppAction::SelectPrev, 0);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn quit_action_stops_the_loop() {
        let mut app = App::new();
        let mut s = session();
        assert!(s.apply(&mut app, AppAction::Quit, 0));
    }

    #[test]
    fn tick_expires_alert_after_ttl() {
        let mut app = App::new();
        let mut s = session();
        submit_student(&mut app, &mut s, ["Ana", "Lee", "20", "a@x.com", "CS"]);

        s.apply(&mut app, AppAction::Remove(0), 1000); // guarded -> alert
        assert!(s.alert.is_showing());
        s.tick(3999);
        assert!(s.alert.is_showing());
        s.tick(4000);
        assert!(!s.alert.is_showing());
    }

    // --- Key conversion ---

    #[test]
    fn crossterm_char_to_key() {
        let key = crossterm_to_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(key, Key::Char('a'));
    }

    #[test]
    fn crossterm_ctrl_to_key() {
        let key = crossterm_to_key(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(key, Key::Ctrl('u'));
    }

    #[test]
    fn crossterm_backtab_to_key() {
        let key = crossterm_to_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key, Key::BackTab);
    }

    #[test]
    fn crossterm_navigation_keys() {
        assert_eq!(crossterm_to_key(KeyCode::Enter, KeyModifiers::NONE), Key::Enter);
        assert_eq!(crossterm_to_key(KeyCode::Esc, KeyModifiers::NONE), Key::Escape);
        assert_eq!(crossterm_to_key(KeyCode::Up, KeyModifiers::NONE), Key::Up);
        assert_eq!(crossterm_to_key(KeyCode::Down, KeyModifiers::NONE), Key::Down);
        assert_eq!(crossterm_to_key(KeyCode::Home, KeyModifiers::NONE), Key::Home);
        assert_eq!(crossterm_to_key(KeyCode::End, KeyModifiers::NONE), Key::End);
    }

    #[test]
    fn crossterm_unmapped_key_is_null_char() {
        let key = crossterm_to_key(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key, Key::Char('\0'));
    }
}
