//! Drag-and-drop lane transitions.
//!
//! The host UI owns the real drag events. It hands them to
//! [`DragDropCoordinator`] through the [`DragEvent`], [`TransferMedium`] and
//! [`DropZone`] traits, and the coordinator turns a completed drop into a
//! [`ProjectStore::move_project`](crate::store::ProjectStore::move_project)
//! call. Nothing is remembered between gestures except what the transfer
//! medium carries.

use crate::{
    domain::board::Lane,
    domain::project::ProjectId,
    store::{MoveOutcome, SharedStore},
};
use std::str::FromStr;
use tracing::{debug, trace};

pub mod headless;

pub use headless::{LaneZone, TransferEnvelope};

/// Payload kind used to carry a project id
pub const PROJECT_ID_KIND: &str = "text/plain";

/// Drop effect advertised by the drag source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
    Link,
}

/// Key/value bag carried along with a drag gesture
pub trait TransferMedium {
    /// Stores `payload` under `kind`
    fn set_data(&mut self, kind: &str, payload: &str);

    /// Reads the payload stored under `kind`
    fn data(&self, kind: &str) -> Option<String>;

    /// Whether a payload of `kind` is advertised
    fn has_kind(&self, kind: &str) -> bool;

    /// Sets the interaction the source permits
    fn set_effect_allowed(&mut self, effect: DropEffect);
}

/// A single drag event as delivered by the host
pub trait DragEvent {
    /// The event's transfer medium, when the host provides one
    fn transfer(&mut self) -> Option<&mut dyn TransferMedium>;

    /// Tells the host to allow a drop on the current target
    fn prevent_default(&mut self);
}

/// A lane list that projects can be dropped on
pub trait DropZone {
    fn lane(&self) -> Lane;

    /// Toggles the lane's visual drop-readiness
    fn set_droppable(&mut self, droppable: bool);
}

/// Result of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The payload named a project id and a move was requested
    Handled(MoveOutcome),
    /// No usable payload; nothing was requested
    Ignored,
}

impl DropOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Handled(outcome) if outcome.is_moved())
    }
}

/// Phase of a single drag gesture
///
/// The coordinator keeps no per-gesture state, so hosts that need to know
/// where a gesture stands track it themselves by feeding each coordinator
/// call through [`GesturePhase::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    DropAccepted,
    Cancelled,
}

/// Event driving [`GesturePhase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    Start,
    Drop,
    End,
}

impl GesturePhase {
    /// Applies `event` to the phase
    ///
    /// `DropAccepted` and `Cancelled` are terminal: the next event is
    /// applied as if from `Idle`. Events that make no sense in the current
    /// phase leave it unchanged.
    pub fn advance(self, event: GestureEvent) -> Self {
        let from = match self {
            Self::DropAccepted | Self::Cancelled => Self::Idle,
            other => other,
        };

        match (from, event) {
            (Self::Idle, GestureEvent::Start) => Self::Dragging,
            (Self::Dragging, GestureEvent::Drop) => Self::DropAccepted,
            (Self::Dragging, GestureEvent::End) => Self::Cancelled,
            (phase, _) => phase,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::DropAccepted | Self::Cancelled)
    }
}

/// Translates drag gestures into store moves
#[derive(Debug, Clone)]
pub struct DragDropCoordinator {
    store: SharedStore,
}

impl DragDropCoordinator {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Source side: puts the dragged project's id on the medium
    pub fn drag_start(&self, event: &mut dyn DragEvent, project_id: &ProjectId) {
        let Some(transfer) = event.transfer() else {
            debug!(project_id = %project_id, "drag start without transfer medium");
            return;
        };
        transfer.set_data(PROJECT_ID_KIND, project_id.as_str());
        transfer.set_effect_allowed(DropEffect::Move);
    }

    /// Target side: accepts the drag only when it carries a project id
    ///
    /// Returns whether the drop was permitted.
    pub fn drag_over(&self, event: &mut dyn DragEvent, zone: &mut dyn DropZone) -> bool {
        let carries_id = event
            .transfer()
            .map(|transfer| transfer.has_kind(PROJECT_ID_KIND))
            .unwrap_or(false);

        if carries_id {
            event.prevent_default();
            zone.set_droppable(true);
        }
        carries_id
    }

    /// Target side: moves the carried project into the zone's lane
    pub fn drop(&self, event: &mut dyn DragEvent, zone: &mut dyn DropZone) -> DropOutcome {
        zone.set_droppable(false);
        let lane = zone.lane();

        let payload = event
            .transfer()
            .and_then(|transfer| transfer.data(PROJECT_ID_KIND));
        let Some(payload) = payload else {
            debug!(lane = %lane, "drop ignored, no project id on transfer");
            return DropOutcome::Ignored;
        };

        match ProjectId::from_str(&payload) {
            Ok(id) => DropOutcome::Handled(self.store.move_project(&id, lane.status())),
            Err(err) => {
                debug!(lane = %lane, error = %err, "drop ignored, malformed payload");
                DropOutcome::Ignored
            }
        }
    }

    /// Target side: the drag left the zone
    pub fn drag_leave(&self, zone: &mut dyn DropZone) {
        zone.set_droppable(false);
    }

    /// Source side: the gesture finished, dropped or not
    pub fn drag_end(&self, event: &mut dyn DragEvent) {
        let carried_id = event
            .transfer()
            .map(|transfer| transfer.has_kind(PROJECT_ID_KIND))
            .unwrap_or(false);
        trace!(carried_id, "drag gesture ended");
    }
}
