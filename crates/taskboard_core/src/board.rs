//! Board application context.
//!
//! # Responsibility
//! - Own the one `ProjectState` of a running board and pass it explicitly
//!   to every handler.
//! - Route host events (submit, drag-start/over/leave/drop/end) to the
//!   form gatherer, the cards and the columns.
//!
//! # Invariants
//! - Exactly one column, with one drop target and one view, per status.
//! - Store writes happen only in `submit` and `drop`.

use crate::config::InputRules;
use crate::drag::card::ProjectCard;
use crate::drag::column::ProjectColumn;
use crate::drag::protocol::{DragOverOutcome, DragTarget, Draggable};
use crate::drag::transfer::DataTransfer;
use crate::input::form::{gather_user_input, InputError};
use crate::model::project::{ProjectId, ProjectStatus};
use crate::state::project_state::{MoveOutcome, ProjectState};
use crate::view::project_list::{ProjectListView, RenderedList};
use log::warn;

/// Drop target and view for one status.
#[derive(Debug)]
pub struct BoardColumn {
    target: ProjectColumn,
    view: ProjectListView,
}

impl BoardColumn {
    fn bind(status: ProjectStatus, state: &mut ProjectState) -> Self {
        Self {
            target: ProjectColumn::new(status),
            view: ProjectListView::bind(status, state),
        }
    }

    pub fn target(&self) -> &ProjectColumn {
        &self.target
    }

    pub fn rendered(&self) -> RenderedList {
        self.view.rendered()
    }
}

/// One running board.
#[derive(Debug)]
pub struct Board {
    state: ProjectState,
    rules: InputRules,
    active: BoardColumn,
    finished: BoardColumn,
}

impl Board {
    /// Creates the store and binds the active then the finished column.
    pub fn new(rules: InputRules) -> Self {
        let mut state = ProjectState::new();
        let active = BoardColumn::bind(ProjectStatus::Active, &mut state);
        let finished = BoardColumn::bind(ProjectStatus::Finished, &mut state);
        Self {
            state,
            rules,
            active,
            finished,
        }
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Mutable store access, e.g. for hosts registering extra listeners.
    pub fn state_mut(&mut self) -> &mut ProjectState {
        &mut self.state
    }

    pub fn rules(&self) -> &InputRules {
        &self.rules
    }

    pub fn column(&self, status: ProjectStatus) -> &BoardColumn {
        match status {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    /// Form submission: validates the raw fields, then adds the project.
    ///
    /// # Errors
    /// Returns the first failing field; the store is left untouched.
    pub fn submit(
        &mut self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectId, InputError> {
        let draft = gather_user_input(&self.rules, title, description, people).map_err(|err| {
            warn!("event=submit_rejected module=board field={}", err.field());
            err
        })?;
        Ok(self
            .state
            .add_project(draft.title, draft.description, draft.people))
    }

    /// Card for a known project id.
    pub fn card(&self, id: &str) -> Option<ProjectCard> {
        self.state.get(id).map(ProjectCard::for_project)
    }

    pub fn drag_start(&self, card: &ProjectCard, transfer: &mut dyn DataTransfer) {
        card.on_drag_start(transfer);
    }

    pub fn drag_end(&self, card: &ProjectCard, transfer: &dyn DataTransfer) {
        card.on_drag_end(transfer);
    }

    pub fn drag_over(
        &mut self,
        status: ProjectStatus,
        transfer: &dyn DataTransfer,
    ) -> DragOverOutcome {
        self.column_mut(status).target.on_drag_over(transfer)
    }

    pub fn drag_leave(&mut self, status: ProjectStatus) {
        self.column_mut(status).target.on_drag_leave();
    }

    /// Drop on the column owning `status`.
    pub fn drop_on(
        &mut self,
        status: ProjectStatus,
        transfer: &dyn DataTransfer,
    ) -> Option<MoveOutcome> {
        let column = match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        };
        column.target.on_drop(transfer, &mut self.state)
    }

    fn column_mut(&mut self, status: ProjectStatus) -> &mut BoardColumn {
        match status {
            ProjectStatus::Active => &mut self.active,
            ProjectStatus::Finished => &mut self.finished,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(InputRules::default())
    }
}
