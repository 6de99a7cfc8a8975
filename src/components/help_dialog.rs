//! Help dialog component
//!
//! Lists the keyboard and mouse shortcuts of the catalog and detail dialog.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Catalog",
        &[
            ("j / ↓", "Next row"),
            ("k / ↑", "Previous row"),
            ("g / G", "First / last row"),
            ("Enter", "Open breed details"),
            ("Double-click", "Open breed details"),
            ("f", "Filter by origin"),
            ("d / Del", "Delete highlighted breed"),
            ("q", "Quit"),
        ],
    ),
    (
        "Breed Details",
        &[
            ("e", "Edit fields"),
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous field"),
            ("Enter / Ctrl+s", "Save"),
            ("Esc", "Cancel editing / close"),
        ],
    ),
];

/// Help dialog showing all shortcuts
#[derive(Default)]
pub struct HelpDialog;

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let content = build_help_content();
        let popup_area = centered_popup(area, 56, content.len() as u16 + 2);
        frame.render_widget(Clear, popup_area);

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (title, shortcuts) in SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, description) in shortcuts.iter() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:16}", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(*description),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_shortcut() {
        let expected: usize = SECTIONS.iter().map(|(_, s)| s.len() + 2).sum::<usize>() + 1;
        assert_eq!(build_help_content().len(), expected);
    }
}
