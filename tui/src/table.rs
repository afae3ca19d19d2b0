//! Roster table rendering and overlays.
//!
//! Renders the filtered roster as a ratatui table, the entry form as a
//! field strip above it, the search bar when open, and the alert banner as
//! an overlay. Completed records are struck through and dimmed; the status
//! badge is green while the training is in progress and red once completed,
//! matching the roster's visual language.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use promotrack_core::alert::AlertSlot;
use promotrack_core::filter::SearchState;
use promotrack_core::roster::Roster;
use promotrack_core::settings::Settings;
use promotrack_core::student::{Student, TrainingStatus};

use crate::app::{App, Mode};
use crate::form::{FormField, FormState};


// ---------------------------------------------------------------------------
// Roster table
// ---------------------------------------------------------------------------

/// Cell texts for one student row, in column order.
pub fn row_cells(student: &Student, settings: &Settings) -> Vec<String> {
    vec![
        student.first_name.clone(),
        student.last_name.clone(),
        student.age.clone(),
        student.email.clone(),
        student.domain.clone(),
        settings.status_label(student.status).to_string(),
    ]
}

/// Short hint shown on the action column for a row.
pub fn action_hint(student: &Student) -> &'static str {
    if student.completed {
        "Annuler"
    } else {
        "Terminer"
    }
}

fn status_color(status: TrainingStatus) -> Color {
    match status {
        TrainingStatus::InProgress => Color::Green,
        TrainingStatus::Completed => Color::Red,
    }
}

/// Render the filtered roster table with a highlighted selection row.
pub fn render_roster(
    frame: &mut Frame,
    area: Rect,
    roster: &Roster,
    search: &SearchState,
    settings: &Settings,
    selected: usize,
) {
    let header = Row::new(vec![
        "Prénom",
        "Nom",
        "Age",
        "Email",
        "Domaine",
        "Formation",
        "Action",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = search
        .matches()
        .iter()
        .enumerate()
        .filter_map(|(view_row, &idx)| roster.get(idx).map(|s| (view_row, s)))
        .map(|(view_row, student)| {
            let mut text_style = Style::default();
            if student.completed {
                text_style = text_style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
            }
            if view_row == selected {
                text_style = text_style.bg(Color::DarkGray);
            }
            let cells = row_cells(student, settings);
            let status = cells[5].clone();
            let mut row: Vec<Cell> = cells
                .into_iter()
                .take(5)
                .map(|c| Cell::from(c).style(text_style))
                .collect();
            row.push(
                Cell::from(status).style(
                    Style::default()
                        .fg(status_color(student.status))
                        .add_modifier(Modifier::BOLD),
                ),
            );
            row.push(Cell::from(action_hint(student)).style(text_style));
            Row::new(row)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Min(18),
        Constraint::Length(16),
        Constraint::Length(10),
        Constraint::Length(9),
    ];

    let title = format!(" Étudiants ({}) ", search.match_count());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}


// ---------------------------------------------------------------------------
// Entry form
// ---------------------------------------------------------------------------

/// Render the entry form as one bordered cell per field. The focused field
/// is highlighted while the form is being edited; empty fields show their
/// label as a placeholder.
pub fn render_form(frame: &mut Frame, area: Rect, form: &FormState, editing: bool) {
    let constraints: Vec<Constraint> =
        FormField::ALL.iter().map(|_| Constraint::Ratio(1, 5)).collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, field) in FormField::ALL.iter().enumerate() {
        let value = form.value(*field);
        let focused = editing && form.focus() == *field;

        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (text, text_style) = if value.is_empty() {
            (
                field.label().to_string(),
                Style::default().add_modifier(Modifier::DIM),
            )
        } else {
            (value, Style::default())
        };

        let cell = Paragraph::new(text)
            .style(text_style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(cell, chunks[i]);

        if focused {
            let cursor_x = chunks[i].x + 1 + form.active_cursor() as u16;
            frame.set_cursor_position((cursor_x, chunks[i].y + 1));
        }
    }
}


// ---------------------------------------------------------------------------
// Search bar
// ---------------------------------------------------------------------------

/// Render the search bar. Only called while the bar is open.
pub fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.mode == Mode::SearchEntry;
    let style = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = format!("Rechercher (Prénom/Nom): {}", app.search.text());
    frame.render_widget(Paragraph::new(text).style(style), area);

    if editing {
        let prefix = "Rechercher (Prénom/Nom): ".chars().count() as u16;
        let cursor_x = area.x + prefix + app.search.cursor_pos() as u16;
        frame.set_cursor_position((cursor_x, area.y));
    }
}


// ---------------------------------------------------------------------------
// Alert banner
// ---------------------------------------------------------------------------

/// Render the alert banner as an overlay at the top of `area`, if an alert
/// is showing.
pub fn render_alert(frame: &mut Frame, area: Rect, alert: &AlertSlot) {
    if let Some(message) = alert.message() {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let banner = Paragraph::new(message.to_string())
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        let banner_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: 3.min(area.height),
        };
        frame.render_widget(banner, banner_area);
    }
}


// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Key hints for the bottom status line, per mode.
pub fn status_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Browse => {
            "a ajouter  / rechercher  j/k naviguer  Entrée terminer/annuler  d supprimer  q quitter"
        }
        Mode::FormEntry => "Tab champ suivant  Entrée ajouter  Échap retour",
        Mode::SearchEntry => "Entrée appliquer  Échap fermer",
    }
}

/// Render the bottom status line.
pub fn render_status_line(frame: &mut Frame, area: Rect, mode: Mode) {
    let text = format!(" {} | {}", mode.label(), status_hints(mode));
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
