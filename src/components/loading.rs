//! Loading screen shown while the breed list is fetched

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

const CAT: [&str; 4] = [r" /\_/\  ", r"( o.o ) ", r" > ^ <  ", r"        "];

/// Draw the loading screen for a fetch from `endpoint`
pub fn draw_loading_screen(frame: &mut Frame, area: Rect, endpoint: &str) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Color::Reset)), area);

    let content_height = CAT.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(content_height),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines: Vec<Line> = CAT
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow))))
        .collect();
    lines.push(Line::from(Span::styled(
        "Loading cat breeds...",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        endpoint.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, chunks[1]);
}
