use crate::{
    dnd::{DragEvent, DropEffect, DropZone, TransferMedium},
    domain::board::Lane,
};

/// In-memory drag event and transfer medium
///
/// Holds at most one payload: setting data under a new kind replaces the
/// previous one. Useful for hosts without a native drag API and for tests.
#[derive(Debug, Clone, Default)]
pub struct TransferEnvelope {
    attached: bool,
    payload: Option<(String, String)>,
    effect_allowed: DropEffect,
    default_prevented: bool,
}

impl TransferEnvelope {
    pub fn new() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    /// An event that carries no transfer medium at all
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> Option<&str> {
        self.payload.as_ref().map(|(kind, _)| kind.as_str())
    }

    pub fn effect_allowed(&self) -> DropEffect {
        self.effect_allowed
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl TransferMedium for TransferEnvelope {
    fn set_data(&mut self, kind: &str, payload: &str) {
        self.payload = Some((kind.to_string(), payload.to_string()));
    }

    fn data(&self, kind: &str) -> Option<String> {
        self.payload
            .as_ref()
            .filter(|(stored, _)| stored == kind)
            .map(|(_, payload)| payload.clone())
    }

    fn has_kind(&self, kind: &str) -> bool {
        self.kind() == Some(kind)
    }

    fn set_effect_allowed(&mut self, effect: DropEffect) {
        self.effect_allowed = effect;
    }
}

impl DragEvent for TransferEnvelope {
    fn transfer(&mut self) -> Option<&mut dyn TransferMedium> {
        if self.attached {
            Some(self)
        } else {
            None
        }
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// Drop zone that only tracks its drop-readiness flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneZone {
    lane: Lane,
    droppable: bool,
}

impl LaneZone {
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            droppable: false,
        }
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }
}

impl DropZone for LaneZone {
    fn lane(&self) -> Lane {
        self.lane
    }

    fn set_droppable(&mut self, droppable: bool) {
        self.droppable = droppable;
    }
}
