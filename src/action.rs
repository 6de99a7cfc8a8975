//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::OriginFilter;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Table Navigation
    // ─────────────────────────────────────────────────────────────────────────
    NextRow,
    PrevRow,
    FirstRow,
    LastRow,
    /// Highlight a visible row (mouse click)
    SelectRow(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// Remove the highlighted record
    DeleteSelected,
    /// Open the detail dialog for the highlighted record
    OpenDetail,
    /// Open the origin filter dropdown
    OpenOriginFilter,
    /// Apply an origin filter
    SetOriginFilter(OriginFilter),

    // ─────────────────────────────────────────────────────────────────────────
    // Detail Dialog
    // ─────────────────────────────────────────────────────────────────────────
    /// Switch between viewing and editing (edit / cancel)
    ToggleEdit,
    /// Write the edit fields back into the record
    SaveEdit,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextRow => write!(f, "NextRow"),
            Action::PrevRow => write!(f, "PrevRow"),
            Action::FirstRow => write!(f, "FirstRow"),
            Action::LastRow => write!(f, "LastRow"),
            Action::SelectRow(row) => write!(f, "SelectRow({})", row),
            Action::DeleteSelected => write!(f, "DeleteSelected"),
            Action::OpenDetail => write!(f, "OpenDetail"),
            Action::OpenOriginFilter => write!(f, "OpenOriginFilter"),
            Action::SetOriginFilter(filter) => write!(f, "SetOriginFilter({})", filter.label()),
            Action::ToggleEdit => write!(f, "ToggleEdit"),
            Action::SaveEdit => write!(f, "SaveEdit"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
