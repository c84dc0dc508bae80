//! Drag source for a single project card.

use crate::drag::protocol::Draggable;
use crate::drag::transfer::{DataTransfer, DragEffect};
use crate::drag::PROJECT_ID_MEDIA_TYPE;
use crate::model::project::{Project, ProjectId};
use log::debug;

/// Draggable card bound to one project id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    project_id: ProjectId,
}

impl ProjectCard {
    pub fn new(project_id: ProjectId) -> Self {
        Self { project_id }
    }

    pub fn for_project(project: &Project) -> Self {
        Self::new(project.id().clone())
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }
}

impl Draggable for ProjectCard {
    fn on_drag_start(&self, transfer: &mut dyn DataTransfer) {
        transfer.set_data(PROJECT_ID_MEDIA_TYPE, self.project_id.as_str());
        transfer.set_effect_allowed(DragEffect::Move);
        debug!("event=drag_start module=drag id={}", self.project_id);
    }

    fn on_drag_end(&self, _transfer: &dyn DataTransfer) {}
}
