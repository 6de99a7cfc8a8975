//! Modal stack for managing overlays
//!
//! Each overlay carries its own state, so the detail dialog travels with its
//! modal entry and is dropped when the modal is popped.

use super::detail::DetailState;

/// Represents a modal overlay that can be displayed on top of the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Origin filter dropdown
    OriginFilter,
    /// Breed detail dialog
    Detail(DetailState),
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Detail state of the top modal, if it is the detail dialog
    pub fn detail_mut(&mut self) -> Option<&mut DetailState> {
        match self.stack.last_mut() {
            Some(Modal::Detail(state)) => Some(state),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::breed::sample_catalog;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::OriginFilter);
        stack.push(Modal::Help);

        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::OriginFilter));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_detail_mut_only_for_detail_on_top() {
        let catalog = sample_catalog();
        let entry = &catalog.entries()[0];
        let mut stack = ModalStack::new();
        stack.push(Modal::Detail(DetailState::open(entry.id, &entry.breed)));

        if let Some(state) = stack.detail_mut() {
            state.toggle_edit();
        }
        assert!(matches!(stack.top(), Some(Modal::Detail(s)) if s.is_editing()));

        stack.push(Modal::Help);
        assert!(stack.detail_mut().is_none());
    }
}
