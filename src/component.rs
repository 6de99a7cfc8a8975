//! Component trait - Interface for UI components
//!
//! Components turn terminal events into Actions and render themselves.
//! State changes that touch the catalog happen in the App, never in a
//! component's event handler.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - Convert events to Actions
/// 2. `update` - Process Actions and update local state
/// 3. `draw` - Render the component
pub trait Component {
    /// Called once before the first frame
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Handle a mouse event, returning an optional Action
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Update component state based on an Action
    ///
    /// May return a follow-up Action, which the main loop feeds back in.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component into `area`
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
