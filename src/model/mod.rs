//! Model layer - centralized state management
//!
//! - `Catalog` - the fetched breed records, addressed by `RecordId`
//! - `DetailState` - viewing/editing state machine for one record
//! - `ModalStack` - modal overlay management

pub mod breed;
pub mod detail;
pub mod modal;

pub use breed::{Breed, Catalog, OriginFilter, RecordId};
pub use detail::{DetailMode, DetailState, EditField};
pub use modal::{Modal, ModalStack};
