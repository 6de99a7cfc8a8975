//! Catalog component - Main application screen
//!
//! Shows the breed table with the origin filter bar above it.
//! Owns the visible row list, highlight and filter; the records themselves
//! stay in the [`Catalog`].

use crate::action::Action;
use crate::components::calculate_main_layout;
use crate::model::{Catalog, OriginFilter, RecordId};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};
use std::time::{Duration, Instant};

/// Two clicks on the same row within this window open the detail dialog
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

/// Rows above the first data row inside the table area (border + header)
const TABLE_HEADER_ROWS: u16 = 2;

// ═══════════════════════════════════════════════════════════════════════════════
// Catalog View
// ═══════════════════════════════════════════════════════════════════════════════

pub struct CatalogView {
    /// Current origin filter
    filter: OriginFilter,

    /// Ids of the records shown, in table order
    visible: Vec<RecordId>,

    /// Table highlight and scroll state
    pub table_state: TableState,

    /// Table area from the last draw, for mouse hit testing
    table_area: Rect,

    /// Row and time of the last left click
    last_click: Option<(usize, Instant)>,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            filter: OriginFilter::All,
            visible: Vec::new(),
            table_state: TableState::default(),
            table_area: Rect::default(),
            last_click: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn filter(&self) -> &OriginFilter {
        &self.filter
    }

    pub fn visible(&self) -> &[RecordId] {
        &self.visible
    }

    /// Switch to a new filter and rebuild the rows; clears the highlight
    pub fn apply_filter(&mut self, filter: OriginFilter, catalog: &Catalog) {
        self.filter = filter;
        self.rebuild(catalog);
        self.table_state.select(None);
        *self.table_state.offset_mut() = 0;
    }

    /// Rebuild the rows for the current filter after the catalog changed
    ///
    /// Keeps the highlighted row index, clamped to the new row count.
    pub fn refresh(&mut self, catalog: &Catalog) {
        self.rebuild(catalog);
        if let Some(selected) = self.table_state.selected() {
            if self.visible.is_empty() {
                self.table_state.select(None);
            } else if selected >= self.visible.len() {
                self.table_state.select(Some(self.visible.len() - 1));
            }
        }
    }

    fn rebuild(&mut self, catalog: &Catalog) {
        self.visible = catalog
            .filtered(&self.filter)
            .into_iter()
            .map(|entry| entry.id)
            .collect();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────────

    /// Record behind the highlighted row
    pub fn selected_record(&self) -> Option<RecordId> {
        self.table_state
            .selected()
            .and_then(|row| self.visible.get(row).copied())
    }

    pub fn select_row(&mut self, row: usize) {
        if row < self.visible.len() {
            self.table_state.select(Some(row));
        }
    }

    /// Highlight the next row, wrapping to the first
    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(row) if row + 1 < self.visible.len() => row + 1,
            _ => 0,
        };
        self.table_state.select(Some(next));
    }

    /// Highlight the previous row, wrapping to the last
    pub fn previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let prev = match self.table_state.selected() {
            Some(row) if row > 0 => row - 1,
            _ => self.visible.len() - 1,
        };
        self.table_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.visible.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.visible.is_empty() {
            self.table_state.select(Some(self.visible.len() - 1));
        }
    }

    /// Visible row under a terminal position, if any
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area;
        let first_data_row = area.y + TABLE_HEADER_ROWS;
        let last_data_row = (area.y + area.height).saturating_sub(1);
        if column <= area.x
            || column >= (area.x + area.width).saturating_sub(1)
            || row < first_data_row
            || row >= last_data_row
        {
            return None;
        }

        let index = (row - first_data_row) as usize + self.table_state.offset();
        (index < self.visible.len()).then_some(index)
    }

    fn click(&mut self, row: usize, at: Instant) -> Action {
        let is_double = matches!(
            self.last_click,
            Some((last_row, last_at)) if last_row == row && at.duration_since(last_at) <= DOUBLE_CLICK_WINDOW
        );

        if is_double {
            self.last_click = None;
            Action::OpenDetail
        } else {
            self.last_click = Some((row, at));
            Action::SelectRow(row)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Event Handling
// ═══════════════════════════════════════════════════════════════════════════════

/// Not a [`Component`](crate::component::Component): drawing needs the
/// catalog, which the App owns. See [`draw_catalog_screen`].
impl CatalogView {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRow),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRow),
            KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRow),
            KeyCode::Char('G') | KeyCode::End => Some(Action::LastRow),

            // Catalog
            KeyCode::Enter => Some(Action::OpenDetail),
            KeyCode::Char('f') => Some(Action::OpenOriginFilter),
            KeyCode::Char('d') | KeyCode::Delete => Some(Action::DeleteSelected),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .row_at(mouse.column, mouse.row)
                .map(|row| self.click(row, Instant::now())),
            MouseEventKind::ScrollDown => Some(Action::NextRow),
            MouseEventKind::ScrollUp => Some(Action::PrevRow),
            _ => None,
        };
        Ok(action)
    }

    pub fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextRow => self.next(),
            Action::PrevRow => self.previous(),
            Action::FirstRow => self.select_first(),
            Action::LastRow => self.select_last(),
            Action::SelectRow(row) => self.select_row(row),
            _ => {}
        }
        Ok(None)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Draw the catalog screen
pub fn draw_catalog_screen(
    frame: &mut Frame,
    area: Rect,
    view: &mut CatalogView,
    catalog: &Catalog,
    status_message: Option<&str>,
) {
    let layout = calculate_main_layout(area);

    render_filter_bar(frame, layout.filter_bar, view);
    render_table(frame, layout.table, view, catalog);
    render_status_bar(frame, layout.status, status_message);
    render_help_bar(frame, layout.help);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, view: &CatalogView) {
    let line = Line::from(vec![
        Span::styled("Filter by origin: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            view.filter.label().to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [f] ", Style::default().fg(Color::Yellow)),
        Span::raw("change  "),
        Span::styled("[d] ", Style::default().fg(Color::Red)),
        Span::raw("Delete breed"),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn render_table(frame: &mut Frame, area: Rect, view: &mut CatalogView, catalog: &Catalog) {
    view.table_area = area;

    let rows: Vec<Row> = view
        .visible
        .iter()
        .filter_map(|id| catalog.get(*id))
        .map(|breed| {
            Row::new(vec![
                breed.name.clone(),
                breed.origin.clone(),
                breed.temperament.clone(),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Origin", "Temperament"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let mut title = format!(" Breeds ({}/{}) ", view.visible().len(), catalog.len());
    if let OriginFilter::Origin(origin) = &view.filter {
        title = format!("{} [origin:{}] ", title.trim_end(), origin);
    }

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .highlight_style(
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut view.table_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, status_message: Option<&str>) {
    let spans = match status_message {
        Some(status) => vec![Span::styled(
            format!(" {} ", status),
            Style::default().fg(Color::Yellow),
        )],
        None => vec![],
    };
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);

    let help_spans = vec![
        Span::styled(" q ", key_style(Color::Yellow)),
        Span::raw("Quit "),
        Span::styled(" j/k ", key_style(Color::Cyan)),
        Span::raw("Move "),
        Span::styled(" Enter ", key_style(Color::Green)),
        Span::raw("Details "),
        Span::styled(" f ", key_style(Color::Cyan)),
        Span::raw("Filter "),
        Span::styled(" d ", key_style(Color::Red)),
        Span::raw("Delete "),
        Span::styled(" ? ", key_style(Color::White)),
        Span::raw("Help"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breed::sample_catalog;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn view_for(catalog: &Catalog) -> CatalogView {
        let mut view = CatalogView::new();
        view.apply_filter(OriginFilter::All, catalog);
        view
    }

    fn visible_names(view: &CatalogView, catalog: &Catalog) -> Vec<String> {
        view.visible()
            .iter()
            .map(|id| catalog.get(*id).unwrap().name.clone())
            .collect()
    }

    fn render(view: &mut CatalogView, catalog: &Catalog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_catalog_screen(frame, area, view, catalog, None)
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_filter_then_all_restores_rows() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);

        view.apply_filter(OriginFilter::Origin("Egypt".to_string()), &catalog);
        assert_eq!(
            visible_names(&view, &catalog),
            vec!["Abyssinian", "Egyptian Mau"]
        );

        view.apply_filter(OriginFilter::All, &catalog);
        assert_eq!(view.visible().len(), catalog.len());
    }

    #[test]
    fn test_filter_clears_highlight() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        view.select_last();
        view.apply_filter(OriginFilter::Origin("Iran".to_string()), &catalog);
        assert_eq!(view.selected_record(), None);
    }

    #[test]
    fn test_selected_record_maps_visible_row() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        view.apply_filter(OriginFilter::Origin("Iran".to_string()), &catalog);
        view.select_first();

        let id = view.selected_record().unwrap();
        assert_eq!(catalog.get(id).unwrap().name, "Persian");
    }

    #[test]
    fn test_navigation_wraps() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);

        view.next();
        assert_eq!(view.table_state.selected(), Some(0));
        view.previous();
        assert_eq!(view.table_state.selected(), Some(3));
        view.next();
        assert_eq!(view.table_state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_on_empty_table() {
        let catalog = Catalog::default();
        let mut view = view_for(&catalog);
        view.next();
        view.select_last();
        assert_eq!(view.table_state.selected(), None);
    }

    #[test]
    fn test_refresh_clamps_highlight_after_delete() {
        let mut catalog = sample_catalog();
        let mut view = view_for(&catalog);
        view.select_last();

        let id = view.selected_record().unwrap();
        catalog.remove(id);
        view.refresh(&catalog);

        assert_eq!(view.table_state.selected(), Some(2));
        assert_eq!(
            visible_names(&view, &catalog),
            vec!["Abyssinian", "Persian", "Egyptian Mau"]
        );
    }

    #[test]
    fn test_refresh_clears_highlight_when_empty() {
        let mut catalog = sample_catalog();
        let mut view = view_for(&catalog);
        view.apply_filter(OriginFilter::Origin("Iran".to_string()), &catalog);
        view.select_first();

        catalog.remove(view.selected_record().unwrap());
        view.refresh(&catalog);

        assert!(view.visible().is_empty());
        assert_eq!(view.selected_record(), None);
    }

    #[test]
    fn test_key_bindings() {
        let mut view = CatalogView::new();
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            view.handle_key_event(press(KeyCode::Enter)).unwrap(),
            Some(Action::OpenDetail)
        );
        assert_eq!(
            view.handle_key_event(press(KeyCode::Char('d'))).unwrap(),
            Some(Action::DeleteSelected)
        );
        assert_eq!(
            view.handle_key_event(press(KeyCode::Char('f'))).unwrap(),
            Some(Action::OpenOriginFilter)
        );
        assert_eq!(view.handle_key_event(press(KeyCode::Char('x'))).unwrap(), None);
    }

    #[test]
    fn test_double_click_opens_detail() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        let now = Instant::now();

        assert_eq!(view.click(1, now), Action::SelectRow(1));
        assert_eq!(
            view.click(1, now + Duration::from_millis(150)),
            Action::OpenDetail
        );
        // A third click starts over
        assert_eq!(
            view.click(1, now + Duration::from_millis(200)),
            Action::SelectRow(1)
        );
    }

    #[test]
    fn test_slow_or_moved_clicks_only_select() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        let now = Instant::now();

        view.click(0, now);
        assert_eq!(view.click(1, now), Action::SelectRow(1));
        assert_eq!(
            view.click(1, now + Duration::from_secs(2)),
            Action::SelectRow(1)
        );
    }

    #[test]
    fn test_mouse_hit_testing_uses_drawn_area() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        render(&mut view, &catalog);

        // Filter bar takes rows 0..3, table border row 3, header row 4
        assert_eq!(view.row_at(10, 4), None);
        assert_eq!(view.row_at(10, 5), Some(0));
        assert_eq!(view.row_at(10, 8), Some(3));
        assert_eq!(view.row_at(10, 9), None);
        assert_eq!(view.row_at(0, 5), None);
    }

    #[test]
    fn test_render_shows_rows_and_filter() {
        let catalog = sample_catalog();
        let mut view = view_for(&catalog);
        view.apply_filter(OriginFilter::Origin("Iran".to_string()), &catalog);

        let screen = render(&mut view, &catalog);
        assert!(screen.contains("Filter by origin: Iran"));
        assert!(screen.contains("Breeds (1/4) [origin:Iran]"));
        assert!(screen.contains("Persian"));
        assert!(!screen.contains("Abyssinian"));
    }
}
