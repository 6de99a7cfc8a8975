//! Root application component
//!
//! The App owns the catalog and is the only place records are removed or
//! rewritten. Child components turn input into Actions; `update` applies them
//! as explicit state transitions.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_catalog_screen, draw_detail_dialog, handle_detail_key, CatalogView, HelpDialog,
    OriginFilterDialog, QuitDialog,
};
use crate::model::{Catalog, DetailState, Modal, ModalStack, OriginFilter};
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Breed records fetched at startup
    pub catalog: Catalog,

    /// Distinct origins of the fetched list, offered by the origin dropdown
    pub origins: Vec<String>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Outcome of the last delete or save
    pub status_message: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub catalog_view: CatalogView,
    pub origin_filter_dialog: OriginFilterDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(catalog: Catalog) -> App {
        App {
            origins: catalog.origins(),
            catalog,
            modals: ModalStack::new(),
            should_quit: false,
            status_message: None,
            catalog_view: CatalogView::new(),
            origin_filter_dialog: OriginFilterDialog::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog,
        }
    }

    /// Apply an action and any follow-ups it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current_action = Some(action);
        while let Some(a) = current_action {
            if a != Action::Tick {
                tracing::debug!(action = %a, "dispatch");
            }
            current_action = self.update(a)?;
        }
        Ok(())
    }

    /// Remove the record behind the highlighted row
    fn delete_selected(&mut self) {
        let Some(id) = self.catalog_view.selected_record() else {
            return;
        };

        if let Some(breed) = self.catalog.remove(id) {
            tracing::info!(record = %id, name = %breed.name, remaining = self.catalog.len(), "deleted breed");
            self.status_message = Some(format!("Deleted {}", breed.name));
        }
        self.catalog_view.refresh(&self.catalog);
    }

    /// Open the detail dialog for the highlighted record
    fn open_detail(&mut self) {
        let Some(id) = self.catalog_view.selected_record() else {
            return;
        };
        if let Some(breed) = self.catalog.get(id) {
            self.modals.push(Modal::Detail(DetailState::open(id, breed)));
        }
    }

    fn open_origin_filter(&mut self) {
        self.origin_filter_dialog
            .set_origins(self.origins.clone(), self.catalog_view.filter());
        self.modals.push(Modal::OriginFilter);
    }

    fn set_origin_filter(&mut self, filter: OriginFilter) {
        tracing::info!(filter = filter.label(), "origin filter changed");
        self.catalog_view.apply_filter(filter, &self.catalog);
        if matches!(self.modals.top(), Some(Modal::OriginFilter)) {
            self.modals.pop();
        }
    }

    fn save_edit(&mut self) {
        let Some(state) = self.modals.detail_mut() else {
            return;
        };

        match state.save(&mut self.catalog) {
            Ok(()) => {
                tracing::info!(record = %state.record(), name = %state.shown().name, "saved breed edit");
                self.status_message = Some(format!("Saved {}", state.shown().name));
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not save breed edit");
                self.status_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    fn close_modal(&mut self) {
        if let Some(Modal::Detail(_)) = self.modals.pop() {
            // Edits may have moved the record in or out of the current filter
            self.catalog_view.refresh(&self.catalog);
        }
    }

    fn handle_modal_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.modals.top_mut() {
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::OriginFilter) => self.origin_filter_dialog.handle_key_event(key),
            Some(Modal::Detail(state)) => handle_detail_key(state, key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => Ok(None),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::OriginFilter => self.origin_filter_dialog.draw(frame, area)?,
            Modal::Detail(state) => draw_detail_dialog(frame, area, state),
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.catalog_view
            .apply_filter(OriginFilter::All, &self.catalog);
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.status_message = None;

        if self.modals.is_empty() {
            self.catalog_view.handle_key_event(key)
        } else {
            self.handle_modal_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Modals are keyboard-only; clicks behind them are ignored
        if self.modals.is_empty() {
            self.catalog_view.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Table Navigation (delegate to CatalogView)
            // ─────────────────────────────────────────────────────────────────
            Action::NextRow
            | Action::PrevRow
            | Action::FirstRow
            | Action::LastRow
            | Action::SelectRow(_) => {
                return self.catalog_view.update(action);
            }

            // ─────────────────────────────────────────────────────────────────
            // Catalog
            // ─────────────────────────────────────────────────────────────────
            Action::DeleteSelected => self.delete_selected(),
            Action::OpenDetail => self.open_detail(),
            Action::OpenOriginFilter => self.open_origin_filter(),
            Action::SetOriginFilter(filter) => self.set_origin_filter(filter),

            // ─────────────────────────────────────────────────────────────────
            // Detail Dialog
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleEdit => {
                if let Some(state) = self.modals.detail_mut() {
                    state.toggle_edit();
                }
            }
            Action::SaveEdit => self.save_edit(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => self.modals.push(Modal::Help),
            Action::CloseModal => self.close_modal(),
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        draw_catalog_screen(
            frame,
            area,
            &mut self.catalog_view,
            &self.catalog,
            self.status_message.as_deref(),
        );

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breed::sample_catalog;
    use crate::model::{Breed, DetailMode};
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with(catalog: Catalog) -> App {
        let mut app = App::new(catalog);
        app.init().unwrap();
        app
    }

    fn run(app: &mut App, actions: &[Action]) {
        for action in actions {
            app.dispatch(action.clone()).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            app.dispatch(action).unwrap();
        }
    }

    fn visible_names(app: &App) -> Vec<String> {
        app.catalog_view
            .visible()
            .iter()
            .map(|id| app.catalog.get(*id).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn test_filter_delete_scenario() {
        let mut app = app_with(Catalog::from_breeds(vec![
            Breed::new("Abyssinian", "Egypt", "Active"),
            Breed::new("Persian", "Iran", "Calm"),
        ]));

        run(
            &mut app,
            &[Action::SetOriginFilter(OriginFilter::Origin("Iran".to_string()))],
        );
        assert_eq!(visible_names(&app), vec!["Persian"]);

        run(&mut app, &[Action::SelectRow(0), Action::DeleteSelected]);
        assert_eq!(app.catalog.len(), 1);
        assert_eq!(app.catalog.entries()[0].breed.name, "Abyssinian");
        assert!(visible_names(&app).is_empty());

        run(&mut app, &[Action::SetOriginFilter(OriginFilter::All)]);
        assert_eq!(visible_names(&app), vec!["Abyssinian"]);
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::DeleteSelected]);
        assert_eq!(app.catalog.len(), 4);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_delete_removes_displayed_row_not_catalog_position() {
        let mut app = app_with(sample_catalog());
        run(
            &mut app,
            &[
                Action::SetOriginFilter(OriginFilter::Origin("Egypt".to_string())),
                Action::SelectRow(1),
                Action::DeleteSelected,
            ],
        );

        let names: Vec<&str> = app
            .catalog
            .entries()
            .iter()
            .map(|e| e.breed.name.as_str())
            .collect();
        assert_eq!(names, vec!["Abyssinian", "Persian", "Bengal"]);
        assert_eq!(app.status_message.as_deref(), Some("Deleted Egyptian Mau"));
    }

    #[test]
    fn test_edit_and_save_through_keys() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::SelectRow(1), Action::OpenDetail]);
        assert!(matches!(app.modals.top(), Some(Modal::Detail(_))));

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Tab);
        for _ in 0.."Iran".len() {
            press(&mut app, KeyCode::Backspace);
        }
        for c in "Persia".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        match app.modals.top() {
            Some(Modal::Detail(state)) => {
                assert_eq!(state.mode(), &DetailMode::Viewing);
                assert_eq!(state.shown().origin, "Persia");
            }
            other => panic!("expected detail dialog, got {:?}", other),
        }
        assert_eq!(app.status_message.as_deref(), Some("Saved Persian"));

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());

        let persian = app.catalog.entries()[1].clone();
        assert_eq!(persian.breed.origin, "Persia");
        assert_eq!(persian.breed.description.as_deref(), Some(""));
        assert_eq!(app.catalog.entries()[0].breed, Breed::new("Abyssinian", "Egypt", "Active"));
    }

    #[test]
    fn test_closing_detail_reapplies_filter() {
        let mut app = app_with(sample_catalog());
        run(
            &mut app,
            &[
                Action::SetOriginFilter(OriginFilter::Origin("Iran".to_string())),
                Action::SelectRow(0),
                Action::OpenDetail,
                Action::ToggleEdit,
            ],
        );
        if let Some(state) = app.modals.detail_mut() {
            state.next_field();
            for _ in 0.."Iran".len() {
                state.backspace();
            }
            "Egypt".chars().for_each(|c| state.input(c));
        }
        run(&mut app, &[Action::SaveEdit]);
        // Still listed until the dialog closes
        assert_eq!(visible_names(&app), vec!["Persian"]);

        run(&mut app, &[Action::CloseModal]);
        assert!(visible_names(&app).is_empty());
        assert_eq!(app.catalog_view.selected_record(), None);
    }

    #[test]
    fn test_cancel_edit_leaves_record_untouched() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::SelectRow(0), Action::OpenDetail]);

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('Z'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);

        assert!(app.modals.is_empty());
        assert_eq!(app.catalog.entries()[0].breed.name, "Abyssinian");
    }

    #[test]
    fn test_open_detail_without_selection_does_nothing() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::OpenDetail]);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_origin_filter_dialog_lists_fetched_origins() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::OpenOriginFilter]);
        assert_eq!(app.modals.top(), Some(&Modal::OriginFilter));
        assert_eq!(
            app.origin_filter_dialog.origins,
            vec!["Egypt", "Iran", "United States"]
        );

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(
            app.catalog_view.filter(),
            &OriginFilter::Origin("Iran".to_string())
        );
        assert_eq!(visible_names(&app), vec!["Persian"]);
    }

    #[test]
    fn test_dropdown_keeps_fetched_origins() {
        let mut app = app_with(Catalog::from_breeds(vec![
            Breed::new("Abyssinian", "Egypt", "Active"),
            Breed::new("Persian", "Iran", "Calm"),
        ]));
        run(
            &mut app,
            &[
                Action::SetOriginFilter(OriginFilter::Origin("Iran".to_string())),
                Action::SelectRow(0),
                Action::DeleteSelected,
                Action::SetOriginFilter(OriginFilter::All),
                Action::SelectRow(0),
                Action::OpenDetail,
                Action::ToggleEdit,
            ],
        );
        if let Some(state) = app.modals.detail_mut() {
            state.next_field();
            "ia".chars().for_each(|c| state.input(c));
        }
        run(&mut app, &[Action::SaveEdit, Action::CloseModal]);
        assert_eq!(app.catalog.entries()[0].breed.origin, "Egyptia");

        run(&mut app, &[Action::OpenOriginFilter]);
        assert_eq!(app.origin_filter_dialog.origins, vec!["Egypt", "Iran"]);
    }

    #[test]
    fn test_saved_values_show_on_next_render() {
        let mut app = app_with(sample_catalog());
        run(
            &mut app,
            &[Action::SelectRow(0), Action::OpenDetail, Action::ToggleEdit],
        );
        if let Some(state) = app.modals.detail_mut() {
            " Prime".chars().for_each(|c| state.input(c));
        }
        run(&mut app, &[Action::SaveEdit, Action::CloseModal]);

        let mut terminal = Terminal::new(TestBackend::new(120, 16)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let lines: Vec<String> = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect())
            .collect();

        // The table row, not just the status line, carries the new name
        assert!(lines
            .iter()
            .any(|line| line.contains("Abyssinian Prime") && line.contains("Egypt")));
        assert!(lines.iter().any(|line| line.contains("Persian")));
    }

    #[test]
    fn test_filter_dialog_on_tiny_terminal() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::OpenOriginFilter]);

        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_quit_flow() {
        let mut app = app_with(sample_catalog());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_keys_go_to_top_modal_only() {
        let mut app = app_with(sample_catalog());
        run(&mut app, &[Action::SelectRow(0), Action::OpenHelp]);
        // 'd' would delete on the catalog screen
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.catalog.len(), 4);
        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }
}
