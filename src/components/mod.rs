//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod catalog;
pub mod detail_dialog;
pub mod help_dialog;
pub mod layout;
pub mod loading;
pub mod origin_filter_dialog;
pub mod quit_dialog;

pub use catalog::{draw_catalog_screen, CatalogView};
pub use detail_dialog::{draw_detail_dialog, handle_detail_key};
pub use help_dialog::HelpDialog;
pub use layout::{calculate_main_layout, centered_popup};
pub use loading::draw_loading_screen;
pub use origin_filter_dialog::OriginFilterDialog;
pub use quit_dialog::QuitDialog;
