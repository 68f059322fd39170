//! # Lanes Core
//!
//! Observable project store and drag-and-drop lane transitions for a
//! two-lane project board.
//!
//! Projects are created through a validated form, live in a single
//! shared [`ProjectStore`], and move between the "active" and "finished"
//! lanes when the host UI reports a drop to the [`DragDropCoordinator`].
//! Rendering and the native drag API stay with the host.

pub mod dnd;
pub mod domain;
pub mod error;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use dnd::{DragDropCoordinator, DragEvent, DropOutcome, DropZone, TransferMedium};
pub use domain::{
    board::{BoardConfig, Lane},
    form::ProjectForm,
    project::{Project, ProjectId, ProjectStatus},
};
pub use error::{BoardError, Result};
pub use session::BoardSession;
pub use store::{MoveOutcome, ProjectStore, SharedStore, Snapshot};
