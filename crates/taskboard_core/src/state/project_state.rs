//! Project store: the single source of truth for board state.
//!
//! # Responsibility
//! - Create projects and append them in insertion order.
//! - Apply status transitions requested by drop targets.
//! - Notify listeners with a snapshot after each committed change.
//!
//! # Invariants
//! - Collection order is insertion order; moves never reorder.
//! - A move to the current status, or to an unknown id, is a silent no-op
//!   and notifies nobody.
//! - Notification happens only after the write is committed.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::state::listeners::{ListenerId, Listeners};
use log::{debug, info};

/// Result of a `move_project` call, for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved,
    /// Project already had the requested status.
    Unchanged,
    /// No project with that id.
    NotFound,
}

/// Authoritative project collection plus its listener registry.
///
/// One instance is owned by the application context (`Board`); handlers get
/// `&mut` access from it rather than through a global.
#[derive(Debug, Default)]
pub struct ProjectState {
    projects: Vec<Project>,
    listeners: Listeners<Project>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for every future committed mutation.
    ///
    /// No de-duplication: the same closure registered twice fires twice.
    pub fn add_listener(&mut self, listener: impl FnMut(Vec<Project>) + 'static) -> ListenerId {
        let id = self.listeners.add(listener);
        debug!(
            "event=listener_added module=state listeners={}",
            self.listeners.len()
        );
        id
    }

    /// Unregisters a listener. Returns `false` when the handle is unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Creates an `active` project, appends it, then notifies listeners.
    ///
    /// Inputs are not validated here.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id().clone();
        self.projects.push(project);
        info!(
            "event=project_added module=state id={} total={}",
            id,
            self.projects.len()
        );
        self.update_listeners();
        id
    }

    /// Sets the status of the project with `id` and notifies listeners.
    ///
    /// Unknown ids and redundant moves leave state untouched and notify
    /// nobody.
    pub fn move_project(&mut self, id: &str, new_status: ProjectStatus) -> MoveOutcome {
        let Some(project) = self.projects.iter_mut().find(|p| p.id().as_str() == id) else {
            debug!("event=move_skipped module=state reason=unknown_id id={id}");
            return MoveOutcome::NotFound;
        };
        if project.status() == new_status {
            debug!("event=move_skipped module=state reason=unchanged id={id} status={new_status}");
            return MoveOutcome::Unchanged;
        }

        let from = project.status();
        project.set_status(new_status);
        info!("event=project_moved module=state id={id} from={from} to={new_status}");
        self.update_listeners();
        MoveOutcome::Moved
    }

    /// Read-only view of the live collection in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Owned copy of the collection, identical to what listeners receive.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id().as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn update_listeners(&mut self) {
        self.listeners.notify(&self.projects);
        debug!(
            "event=listeners_notified module=state listeners={} projects={}",
            self.listeners.len(),
            self.projects.len()
        );
    }
}
