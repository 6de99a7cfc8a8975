//! Breed detail dialog
//!
//! Renders a [`DetailState`] and maps keys to detail actions. Field typing is
//! applied to the state directly; saving goes through the App so the catalog
//! stays the only place records are written.

use crate::action::Action;
use crate::components::centered_popup;
use crate::model::{DetailMode, DetailState, EditField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 70;
const DIALOG_HEIGHT: u16 = 18;

/// Map a key press to an action, editing the fields in place while editing
pub fn handle_detail_key(state: &mut DetailState, key: KeyEvent) -> Result<Option<Action>> {
    if !state.is_editing() {
        let action = match key.code {
            KeyCode::Char('e') => Some(Action::ToggleEdit),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CloseModal),
            _ => None,
        };
        return Ok(action);
    }

    let action = match key.code {
        KeyCode::Esc => Some(Action::ToggleEdit),
        KeyCode::Enter => Some(Action::SaveEdit),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::SaveEdit)
        }
        KeyCode::Tab | KeyCode::Down => {
            state.next_field();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.prev_field();
            None
        }
        KeyCode::Backspace => {
            state.backspace();
            None
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.input(c);
            None
        }
        _ => None,
    };
    Ok(action)
}

/// Draw the detail dialog over `area`
pub fn draw_detail_dialog(frame: &mut Frame, area: Rect, state: &DetailState) {
    let popup_area = centered_popup(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, popup_area);

    let border_color = if state.is_editing() {
        Color::Green
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Breed Details ")
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines = match state.mode() {
        DetailMode::Viewing => viewing_lines(state),
        DetailMode::Editing { fields, focus } => EditField::all()
            .into_iter()
            .flat_map(|field| {
                let focused = field == *focus;
                let label_style = if focused {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let cursor = if focused { "_" } else { "" };
                [
                    Line::from(Span::styled(format!("{}:", field.label()), label_style)),
                    Line::from(vec![
                        Span::styled("> ", Style::default().fg(Color::Cyan)),
                        Span::styled(
                            format!("{}{}", fields.get(field), cursor),
                            Style::default().fg(Color::White),
                        ),
                    ]),
                ]
            })
            .collect(),
    };

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(content, chunks[0]);

    frame.render_widget(
        Paragraph::new(help_line(state)).alignment(ratatui::layout::Alignment::Center),
        chunks[1],
    );
}

fn viewing_lines(state: &DetailState) -> Vec<Line<'static>> {
    let breed = state.shown();
    let label = |text: &str| {
        Span::styled(
            format!("{}: ", text),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    vec![
        Line::from(vec![label("Name"), Span::raw(breed.name.clone())]),
        Line::from(vec![label("Origin"), Span::raw(breed.origin.clone())]),
        Line::from(vec![
            label("Temperament"),
            Span::raw(breed.temperament.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            label("Description"),
            Span::raw(breed.description_label().to_string()),
        ]),
    ]
}

fn help_line(state: &DetailState) -> Line<'static> {
    let key = |text: &'static str, color: Color| {
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    if state.is_editing() {
        Line::from(vec![
            key(" Enter ", Color::Green),
            Span::raw("Save  "),
            key(" Esc ", Color::Yellow),
            Span::raw("Cancel  "),
            key(" Tab ", Color::Cyan),
            Span::raw("Next field"),
        ])
    } else {
        Line::from(vec![
            key(" e ", Color::Green),
            Span::raw("Edit  "),
            key(" Esc ", Color::Yellow),
            Span::raw("Close"),
        ])
    }
}
