//! Origin filter dialog component
//!
//! Dropdown of "All origins" followed by every distinct origin in the catalog.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::OriginFilter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Origin filter dropdown
pub struct OriginFilterDialog {
    /// Available origins, sorted
    pub origins: Vec<String>,
    /// Selected option index (0 is "All origins")
    pub selected_index: usize,
    /// List state for rendering
    pub list_state: ListState,
    /// Filter active when the dialog opened
    pub current: OriginFilter,
}

impl Default for OriginFilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginFilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            origins: Vec::new(),
            selected_index: 0,
            list_state,
            current: OriginFilter::All,
        }
    }

    /// Set the options and preselect the active filter
    pub fn set_origins(&mut self, origins: Vec<String>, current: &OriginFilter) {
        self.origins = origins;
        self.current = current.clone();

        self.selected_index = match current {
            OriginFilter::All => 0,
            OriginFilter::Origin(origin) => self
                .origins
                .iter()
                .position(|o| o == origin)
                .map(|idx| idx + 1)
                .unwrap_or(0),
        };
        self.list_state.select(Some(self.selected_index));
    }

    /// Filter for the highlighted option
    pub fn selected_filter(&self) -> OriginFilter {
        match self.selected_index {
            0 => OriginFilter::All,
            idx => self
                .origins
                .get(idx - 1)
                .cloned()
                .map(OriginFilter::Origin)
                .unwrap_or_default(),
        }
    }

    fn select_next(&mut self) {
        if self.selected_index < self.origins.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn option_item(&self, filter: &OriginFilter) -> ListItem<'static> {
        let is_current = *filter == self.current;
        ListItem::new(Line::from(vec![
            Span::styled(
                if is_current { "● " } else { "  " },
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                filter.label().to_string(),
                if is_current {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                },
            ),
        ]))
    }
}

impl Component for OriginFilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetOriginFilter(self.selected_filter())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Header and help bar take 6 rows, the list border 2, "All origins" 1
        let wanted_height = (self.origins.len() as u16 + 9).max(10);
        let popup_area = centered_popup(area, 50, wanted_height);
        frame.render_widget(Clear, popup_area);

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Options
                Constraint::Length(3), // Help bar
            ])
            .split(popup_area);

        let header = Paragraph::new(Line::from(vec![Span::styled(
            format!("Current: {}", self.current.label()),
            Style::default().fg(Color::Cyan),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filter by Origin ")
                .title_style(
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(header, main_chunks[0]);

        let mut items = vec![self.option_item(&OriginFilter::All)];
        items.extend(
            self.origins
                .iter()
                .map(|origin| self.option_item(&OriginFilter::Origin(origin.clone()))),
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, main_chunks[1], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Select  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, main_chunks[2]);

        Ok(())
    }
}
