//! Drop target for one board column.
//!
//! # Invariants
//! - A column owns exactly one status and only ever moves projects to it.
//! - The droppable affordance is on only between an accepted drag-over and
//!   the following drag-leave or drop.

use crate::drag::protocol::{DragOverOutcome, DragTarget};
use crate::drag::transfer::DataTransfer;
use crate::drag::PROJECT_ID_MEDIA_TYPE;
use crate::model::project::ProjectStatus;
use crate::state::project_state::{MoveOutcome, ProjectState};
use log::debug;

/// Column accepting project drops for a fixed status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectColumn {
    status: ProjectStatus,
    droppable: bool,
}

impl ProjectColumn {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            droppable: false,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Whether the host should render the drop affordance.
    pub fn is_droppable(&self) -> bool {
        self.droppable
    }
}

impl DragTarget for ProjectColumn {
    fn on_drag_over(&mut self, transfer: &dyn DataTransfer) -> DragOverOutcome {
        let advertises_id = transfer
            .types()
            .first()
            .is_some_and(|media_type| media_type == PROJECT_ID_MEDIA_TYPE);
        if !advertises_id {
            return DragOverOutcome::Ignore;
        }
        self.droppable = true;
        DragOverOutcome::Accept
    }

    fn on_drag_leave(&mut self) {
        self.droppable = false;
    }

    fn on_drop(
        &mut self,
        transfer: &dyn DataTransfer,
        state: &mut ProjectState,
    ) -> Option<MoveOutcome> {
        self.droppable = false;
        let Some(project_id) = transfer.get_data(PROJECT_ID_MEDIA_TYPE) else {
            debug!(
                "event=drop module=drag status=ignored reason=missing_payload column={}",
                self.status
            );
            return None;
        };
        let outcome = state.move_project(&project_id, self.status);
        debug!(
            "event=drop module=drag column={} id={} outcome={:?}",
            self.status, project_id, outcome
        );
        Some(outcome)
    }
}
