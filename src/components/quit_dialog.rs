//! Quit confirmation dialog component

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

/// Quit confirmation dialog
#[derive(Default)]
pub struct QuitDialog;

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let content = vec![
            Line::from(""),
            Line::from(Span::styled("Quit the breed catalog?", bold(Color::White))),
            Line::from(Span::styled(
                "Edits and deletions are not kept.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", bold(Color::Green)),
                Span::raw("Quit  "),
                Span::styled(" n/Esc ", bold(Color::Red)),
                Span::raw("Stay"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit? ")
                    .title_style(bold(Color::Yellow)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_quit_dialog_keys() {
        let mut dialog = QuitDialog;
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Char('y'))).unwrap(),
            Some(Action::ForceQuit)
        );
        assert_eq!(
            dialog.handle_key_event(press(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(dialog.handle_key_event(press(KeyCode::Enter)).unwrap(), None);
    }
}
