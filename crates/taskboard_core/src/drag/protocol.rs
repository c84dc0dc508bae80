//! Source and target roles of a drag gesture.

use crate::drag::transfer::DataTransfer;
use crate::state::project_state::{MoveOutcome, ProjectState};

/// What a target answers on drag-over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverOutcome {
    /// Suppress the platform's default rejection; a drop may follow.
    Accept,
    /// Leave the default rejection in place.
    Ignore,
}

impl DragOverOutcome {
    /// Whether the host must cancel the platform default for this event.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Accept)
    }
}

/// Source role, implemented by things that can be picked up.
pub trait Draggable {
    fn on_drag_start(&self, transfer: &mut dyn DataTransfer);
    fn on_drag_end(&self, transfer: &dyn DataTransfer);
}

/// Target role, implemented by things that accept drops.
pub trait DragTarget {
    fn on_drag_over(&mut self, transfer: &dyn DataTransfer) -> DragOverOutcome;
    fn on_drag_leave(&mut self);
    /// Applies the drop to `state`. `None` when the payload carried no id.
    fn on_drop(
        &mut self,
        transfer: &dyn DataTransfer,
        state: &mut ProjectState,
    ) -> Option<MoveOutcome>;
}
